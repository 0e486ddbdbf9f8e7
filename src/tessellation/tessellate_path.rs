use crate::error::{Result, TessellationError};
use crate::path::PathStore;

use super::{Polyline, TessellationParams};

/// Samples a whole path into a polyline, e.g. for drawing it in an editor.
///
/// Samples are uniform in each segment's local parameter, so they bunch up
/// where the curve moves slowly. Joints between segments appear once.
pub struct TessellatePath {
    params: TessellationParams,
}

impl TessellatePath {
    /// Creates a new `TessellatePath` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples_per_segment` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self, store: &PathStore) -> Result<Polyline> {
        let samples = self.params.samples_per_segment;
        if samples == 0 {
            return Err(TessellationError::InvalidParameters(
                "samples_per_segment must be at least 1".into(),
            )
            .into());
        }

        let mut points = Vec::with_capacity(store.segment_count() * samples + 1);
        for index in 0..store.segment_count() {
            let segment = store.segment(index)?;
            if index == 0 {
                points.push(segment.p0);
            }
            for step in 1..=samples {
                points.push(segment.point_at(step as f64 / samples as f64));
            }
        }
        Ok(Polyline { points })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point3;
    use crate::operations::modification::{AppendSegment, SetPoint};
    use crate::operations::query::PositionAt;

    #[test]
    fn sample_count_and_endpoints() {
        let mut store = PathStore::default();
        AppendSegment::default().execute(&mut store).unwrap();
        let polyline = TessellatePath::new(TessellationParams {
            samples_per_segment: 4,
        })
        .execute(&store)
        .unwrap();
        assert_eq!(polyline.points.len(), 9);
        assert_eq!(polyline.points[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(polyline.points[4], Point3::new(3.0, 0.0, 0.0));
        assert_eq!(polyline.points[8], Point3::new(6.0, 0.0, 0.0));
    }

    #[test]
    fn samples_lie_on_the_path() {
        let mut store = PathStore::default();
        AppendSegment::default().execute(&mut store).unwrap();
        SetPoint::new(4, Point3::new(4.0, 2.0, 1.0)).execute(&mut store).unwrap();
        let polyline = TessellatePath::new(TessellationParams::default())
            .execute(&store)
            .unwrap();
        let last = u32::try_from(polyline.points.len() - 1).unwrap();
        for (i, point) in (0..=last).zip(&polyline.points) {
            let progress = f64::from(i) / f64::from(last);
            let expected = PositionAt::new(progress).execute(&store).unwrap();
            assert_relative_eq!(*point, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_samples_is_rejected() {
        let store = PathStore::default();
        let result = TessellatePath::new(TessellationParams {
            samples_per_segment: 0,
        })
        .execute(&store);
        assert!(result.is_err());
    }
}
