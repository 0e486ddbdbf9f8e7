use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::path::{progress, PathStore};

use super::EnforceContinuity;

/// Moves one control point while keeping the path smooth.
///
/// Moving an anchor drags its adjacent handles by the same offset, so the
/// tangent shape around it travels rigidly. Moving a handle moves only that
/// handle. Either way continuity is enforced afterwards around the edited
/// point.
pub struct SetPoint {
    index: usize,
    position: Point3,
}

impl SetPoint {
    /// Creates a new `SetPoint` operation.
    #[must_use]
    pub fn new(index: usize, position: Point3) -> Self {
        Self { index, position }
    }

    /// Executes the edit on `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range. The store is left untouched
    /// in that case.
    pub fn execute(&self, store: &mut PathStore) -> Result<()> {
        let old = store.point(self.index)?;

        if progress::is_anchor(self.index) {
            let delta = self.position - old;
            if self.index > 0 {
                let before = store.point(self.index - 1)?;
                store.set_point(self.index - 1, before + delta)?;
            }
            if self.index + 1 < store.point_count() {
                let after = store.point(self.index + 1)?;
                store.set_point(self.index + 1, after + delta)?;
            }
        }
        store.set_point(self.index, self.position)?;
        debug!(index = self.index, position = ?self.position, "control point moved");

        EnforceContinuity::new(self.index).execute(store)
    }
}
