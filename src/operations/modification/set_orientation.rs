use tracing::debug;

use crate::error::Result;
use crate::math::UnitQuaternion;
use crate::path::{progress, PathStore};

/// Sets the orientation keyframe of the anchor at control point `index`.
///
/// Handles carry no keyframe of their own, so targeting a handle is a no-op.
pub struct SetOrientation {
    index: usize,
    rotation: UnitQuaternion,
}

impl SetOrientation {
    /// Creates a new `SetOrientation` operation.
    #[must_use]
    pub fn new(index: usize, rotation: UnitQuaternion) -> Self {
        Self { index, rotation }
    }

    /// Executes the edit, returning whether a keyframe was written.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a control point of the store.
    pub fn execute(&self, store: &mut PathStore) -> Result<bool> {
        store.point(self.index)?;
        if !progress::is_anchor(self.index) {
            return Ok(false);
        }
        store.set_orientation(self.index / 3, self.rotation)?;
        debug!(index = self.index, "orientation keyframe set");
        Ok(true)
    }
}
