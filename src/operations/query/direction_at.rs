use tracing::warn;

use crate::error::{GeometryError, PathError, Result, RidepathError};
use crate::geometry::Curve;
use crate::math::Vector3;
use crate::path::{progress, PathStore};

/// Computes the unit travel direction at a global progress value.
pub struct DirectionAt {
    progress: f64,
}

impl DirectionAt {
    /// Creates a new `DirectionAt` query. Progress is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(progress: f64) -> Self {
        Self { progress }
    }

    /// Executes the query, returning the normalized derivative.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::DegenerateTangent`] when the velocity vanishes,
    /// e.g. where a handle sits on top of its anchor.
    pub fn execute(&self, store: &PathStore) -> Result<Vector3> {
        let location = progress::to_segment(self.progress, store.segment_count());
        let segment = store.segment(location.segment)?;
        segment.tangent(location.t).map_err(|err| match err {
            RidepathError::Geometry(GeometryError::ZeroVector) => {
                warn!(progress = self.progress, "direction requested where velocity is zero");
                PathError::DegenerateTangent {
                    progress: self.progress,
                }
                .into()
            }
            other => other,
        })
    }
}
