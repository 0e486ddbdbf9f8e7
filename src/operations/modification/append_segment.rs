use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{Vector3, TOLERANCE};
use crate::path::PathStore;

use super::EnforceContinuity;

/// Outcome of [`AppendSegment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppendedSegment {
    /// Point index of the anchor that became interior with this append.
    pub joint: usize,
    /// Factor the rider's progress must be multiplied by to stay near its
    /// previous place on the path.
    ///
    /// This is `(segments - 1) / segments` with the post-append count. It only
    /// corrects the ratio; with uniform parametrization the rider still shifts
    /// slightly.
    pub progress_scale: f64,
}

/// Grows the path by one straight segment at its end.
///
/// The three new points continue from the last anchor, one `step` apart.
/// The last keyframe is duplicated so the new segment keeps the end
/// orientation, and continuity is enforced at the joint.
pub struct AppendSegment {
    step: Vector3,
}

impl Default for AppendSegment {
    fn default() -> Self {
        Self { step: Vector3::x() }
    }
}

impl AppendSegment {
    /// Creates a new `AppendSegment` operation extending along `step`.
    #[must_use]
    pub fn new(step: Vector3) -> Self {
        Self { step }
    }

    /// Executes the append.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is zero-length, which would stack the new
    /// points on top of each other.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, store: &mut PathStore) -> Result<AppendedSegment> {
        if self.step.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }

        let last = store.point(store.point_count() - 1)?;
        let rotation = store.orientation(store.orientation_count() - 1)?;
        store.extend(
            [last + self.step, last + self.step * 2.0, last + self.step * 3.0],
            rotation,
        );

        let joint = store.point_count() - 4;
        EnforceContinuity::new(joint).execute(store)?;

        let segments = store.segment_count() as f64;
        let outcome = AppendedSegment {
            joint,
            progress_scale: (segments - 1.0) / segments,
        };
        debug!(joint, segments = store.segment_count(), "segment appended");
        Ok(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{Point3, UnitQuaternion};
    use crate::operations::modification::SetPoint;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn grows_by_three_points_and_one_segment() {
        let mut store = PathStore::default();
        let outcome = AppendSegment::default().execute(&mut store).unwrap();
        assert_eq!(store.point_count(), 7);
        assert_eq!(store.segment_count(), 2);
        assert_eq!(store.orientation_count(), 3);
        assert_eq!(outcome.joint, 3);
        assert_relative_eq!(outcome.progress_scale, 0.5);
        assert_eq!(store.point(6).unwrap(), p(6.0, 0.0, 0.0));
    }

    #[test]
    fn duplicates_last_keyframe() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.7);
        let mut store = PathStore::new(Point3::origin(), rotation);
        AppendSegment::default().execute(&mut store).unwrap();
        assert_eq!(store.orientation(2).unwrap(), rotation);
    }

    #[test]
    fn joint_handles_are_mirrored() {
        let mut store = PathStore::default();
        // Bend the incoming handle at the end before appending.
        SetPoint::new(2, p(2.0, 1.0, 0.0)).execute(&mut store).unwrap();
        AppendSegment::default().execute(&mut store).unwrap();

        let anchor = store.point(3).unwrap();
        let incoming = store.point(2).unwrap() - anchor;
        let outgoing = store.point(4).unwrap() - anchor;
        assert_relative_eq!(incoming, -outgoing);
        assert_eq!(store.point(4).unwrap(), p(4.0, -1.0, 0.0));
        // The rest of the new segment still follows the step.
        assert_eq!(store.point(5).unwrap(), p(5.0, 0.0, 0.0));
    }

    #[test]
    fn custom_step_direction() {
        let mut store = PathStore::default();
        AppendSegment::new(Vector3::new(0.0, 0.0, 2.0))
            .execute(&mut store)
            .unwrap();
        assert_eq!(store.point(6).unwrap(), p(3.0, 0.0, 6.0));
    }

    #[test]
    fn zero_step_is_rejected() {
        let mut store = PathStore::default();
        assert!(AppendSegment::new(Vector3::zeros()).execute(&mut store).is_err());
        assert_eq!(store.segment_count(), 1);
    }

    #[test]
    fn progress_scale_uses_post_append_count() {
        let mut store = PathStore::default();
        let scales: Vec<f64> = (0..3)
            .map(|_| AppendSegment::default().execute(&mut store).unwrap().progress_scale)
            .collect();
        assert_relative_eq!(scales[0], 1.0 / 2.0);
        assert_relative_eq!(scales[1], 2.0 / 3.0);
        assert_relative_eq!(scales[2], 3.0 / 4.0);
    }
}
