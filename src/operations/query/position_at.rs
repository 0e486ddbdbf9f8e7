use crate::error::Result;
use crate::geometry::Curve;
use crate::math::{Point3, Vector3};
use crate::path::{progress, PathStore};

/// Evaluates the path position at a global progress value.
pub struct PositionAt {
    progress: f64,
}

impl PositionAt {
    /// Creates a new `PositionAt` query. Progress is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(progress: f64) -> Self {
        Self { progress }
    }

    /// Executes the query, returning the point on the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the store's segment lookup fails.
    pub fn execute(&self, store: &PathStore) -> Result<Point3> {
        let location = progress::to_segment(self.progress, store.segment_count());
        store.segment(location.segment)?.evaluate(location.t)
    }
}

/// Evaluates the raw velocity (first derivative with respect to the local
/// parameter) at a global progress value.
pub struct VelocityAt {
    progress: f64,
}

impl VelocityAt {
    /// Creates a new `VelocityAt` query. Progress is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(progress: f64) -> Self {
        Self { progress }
    }

    /// Executes the query, returning the unnormalized derivative.
    ///
    /// # Errors
    ///
    /// Returns an error if the store's segment lookup fails.
    pub fn execute(&self, store: &PathStore) -> Result<Vector3> {
        let location = progress::to_segment(self.progress, store.segment_count());
        Ok(store.segment(location.segment)?.derivative(location.t))
    }
}
