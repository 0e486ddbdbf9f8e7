pub mod progress;
mod store;

pub use progress::SegmentLocation;
pub use store::PathStore;

use tracing::debug;

use crate::error::Result;
use crate::math::{Point3, UnitQuaternion, Vector3};
use crate::operations::modification::{AppendSegment, SetOrientation, SetPoint};
use crate::operations::query::{DirectionAt, OrientationAt, PositionAt, VelocityAt};

/// Position and orientation of the rider at one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiderPose {
    /// Point on the path.
    pub position: Point3,
    /// Interpolated keyframe rotation.
    pub orientation: UnitQuaternion,
}

/// A rider travelling along an editable composite cubic path.
///
/// Owns the [`PathStore`] and the rider's current progress. All edits go
/// through the continuity-preserving operations, so every interior anchor
/// keeps mirrored handles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiderPath {
    store: PathStore,
    progress: f64,
}

impl RiderPath {
    /// Creates a rider at progress 0 on a single straight segment starting at `origin`.
    #[must_use]
    pub fn new(origin: Point3, rotation: UnitQuaternion) -> Self {
        Self::from_store(PathStore::new(origin, rotation))
    }

    /// Wraps an existing store with the rider at progress 0.
    #[must_use]
    pub fn from_store(store: PathStore) -> Self {
        Self {
            store,
            progress: 0.0,
        }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &PathStore {
        &self.store
    }

    /// Consumes the rider, returning its store.
    #[must_use]
    pub fn into_store(self) -> PathStore {
        self.store
    }

    /// Current progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Moves the rider. Values outside `[0, 1]` are clamped.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress::clamp_progress(progress);
    }

    /// Pose of the rider at its current progress.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    pub fn pose(&self) -> Result<RiderPose> {
        Ok(RiderPose {
            position: self.evaluate_position(self.progress)?,
            orientation: self.evaluate_orientation(self.progress)?,
        })
    }

    /// Position on the path at `progress`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    pub fn evaluate_position(&self, progress: f64) -> Result<Point3> {
        PositionAt::new(progress).execute(&self.store)
    }

    /// Unnormalized velocity at `progress`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    pub fn evaluate_velocity(&self, progress: f64) -> Result<Vector3> {
        VelocityAt::new(progress).execute(&self.store)
    }

    /// Unit travel direction at `progress`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PathError::DegenerateTangent`] where the
    /// velocity is zero.
    pub fn evaluate_direction(&self, progress: f64) -> Result<Vector3> {
        DirectionAt::new(progress).execute(&self.store)
    }

    /// Interpolated orientation at `progress`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    pub fn evaluate_orientation(&self, progress: f64) -> Result<UnitQuaternion> {
        OrientationAt::new(progress).execute(&self.store)
    }

    /// Number of cubic segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.store.segment_count()
    }

    /// Number of control points (anchors and handles).
    #[must_use]
    pub fn control_point_count(&self) -> usize {
        self.store.point_count()
    }

    /// Control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn point(&self, index: usize) -> Result<Point3> {
        Ok(self.store.point(index)?)
    }

    /// Orientation keyframe that applies at control point `index`.
    ///
    /// Handles report the keyframe of the anchor that owns them.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn orientation(&self, index: usize) -> Result<UnitQuaternion> {
        self.store.point(index)?;
        let anchor = progress::handle_owner_anchor(index);
        Ok(self.store.orientation(anchor / 3)?)
    }

    /// Returns whether control point `index` is an anchor rather than a handle.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn is_anchor(&self, index: usize) -> bool {
        progress::is_anchor(index)
    }

    /// Control point sitting exactly at `progress`, if any.
    #[must_use]
    pub fn selected_index_for_progress(&self, progress: f64) -> Option<usize> {
        progress::selected_index(progress, self.store.segment_count())
    }

    /// Progress at which control point `index` sits.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn progress_for_index(&self, index: usize) -> Result<f64> {
        self.store.point(index)?;
        Ok(progress::progress_for_index(index, self.store.segment_count()))
    }

    /// Moves control point `index`, keeping the path C1 continuous.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_point(&mut self, index: usize, position: Point3) -> Result<()> {
        SetPoint::new(index, position).execute(&mut self.store)
    }

    /// Sets the keyframe of the anchor at `index`; handles are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_orientation(&mut self, index: usize, rotation: UnitQuaternion) -> Result<()> {
        SetOrientation::new(index, rotation).execute(&mut self.store)?;
        Ok(())
    }

    /// Appends a straight segment along +X and rescales the rider's progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the append fails.
    pub fn append_segment(&mut self) -> Result<()> {
        self.append_segment_along(Vector3::x())
    }

    /// Appends a straight segment along `step` and rescales the rider's progress.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is zero-length.
    pub fn append_segment_along(&mut self, step: Vector3) -> Result<()> {
        let appended = AppendSegment::new(step).execute(&mut self.store)?;
        self.progress *= appended.progress_scale;
        debug!(progress = self.progress, "rider progress rescaled after append");
        Ok(())
    }
}
