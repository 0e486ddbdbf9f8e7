use crate::error::Result;
use crate::geometry::interpolate_orientation;
use crate::math::UnitQuaternion;
use crate::path::{progress, PathStore};

/// Interpolates the rider orientation at a global progress value.
///
/// Keyframes sit on anchors; between two anchors the orientation is the
/// shortest-path slerp over the segment's local parameter.
pub struct OrientationAt {
    progress: f64,
}

impl OrientationAt {
    /// Creates a new `OrientationAt` query. Progress is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(progress: f64) -> Self {
        Self { progress }
    }

    /// Executes the query, returning the interpolated rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if a keyframe lookup fails.
    pub fn execute(&self, store: &PathStore) -> Result<UnitQuaternion> {
        if progress::clamp_progress(self.progress) >= 1.0 {
            return Ok(store.orientation(store.orientation_count() - 1)?);
        }
        let location = progress::to_segment(self.progress, store.segment_count());
        let from = store.orientation(location.segment)?;
        let to = store.orientation(location.segment + 1)?;
        Ok(interpolate_orientation(&from, &to, location.t))
    }
}
