use tracing::debug;

use crate::error::PathError;
use crate::geometry::CubicBezier;
use crate::math::{Point3, UnitQuaternion, Vector3};

/// Owner of the raw control-point and orientation arrays of a path.
///
/// Points are laid out flat: indices that are multiples of 3 are anchors,
/// everything in between is a tangent handle. There is one orientation
/// keyframe per anchor.
///
/// The store only guards array bounds and lengths. Tangent continuity is
/// maintained by the edit operations in [`crate::operations::modification`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathStore {
    points: Vec<Point3>,
    orientations: Vec<UnitQuaternion>,
}

impl Default for PathStore {
    fn default() -> Self {
        Self::new(Point3::origin(), UnitQuaternion::identity())
    }
}

impl PathStore {
    /// Creates a store holding a single straight segment.
    ///
    /// The four control points start at `origin` and advance one unit at a
    /// time along +X. Both keyframes are set to `rotation`.
    #[must_use]
    pub fn new(origin: Point3, rotation: UnitQuaternion) -> Self {
        let step = Vector3::x();
        Self {
            points: vec![origin, origin + step, origin + step * 2.0, origin + step * 3.0],
            orientations: vec![rotation, rotation],
        }
    }

    /// Rebuilds a store from raw arrays, e.g. ones read back by a persistence layer.
    ///
    /// # Errors
    ///
    /// Returns an error if `points.len()` is not `3k + 1` with `k >= 1`, or if
    /// there is not exactly one orientation per anchor.
    pub fn from_parts(
        points: Vec<Point3>,
        orientations: Vec<UnitQuaternion>,
    ) -> Result<Self, PathError> {
        if points.len() < 4 || points.len() % 3 != 1 {
            return Err(PathError::InvalidStructure(format!(
                "expected 3k+1 control points (k >= 1), got {}",
                points.len()
            )));
        }
        let anchors = (points.len() - 1) / 3 + 1;
        if orientations.len() != anchors {
            return Err(PathError::InvalidStructure(format!(
                "expected {anchors} orientations, got {}",
                orientations.len()
            )));
        }
        Ok(Self {
            points,
            orientations,
        })
    }

    /// Number of cubic segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Number of control points (anchors and handles).
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of orientation keyframes.
    #[must_use]
    pub fn orientation_count(&self) -> usize {
        self.orientations.len()
    }

    /// All control points in path order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// All orientation keyframes in anchor order.
    #[must_use]
    pub fn orientations(&self) -> &[UnitQuaternion] {
        &self.orientations
    }

    /// Returns the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn point(&self, index: usize) -> Result<Point3, PathError> {
        self.points
            .get(index)
            .copied()
            .ok_or(PathError::IndexOutOfRange {
                what: "control point",
                index,
                len: self.points.len(),
            })
    }

    /// Overwrites the control point at `index` without touching its neighbours.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_point(&mut self, index: usize, point: Point3) -> Result<(), PathError> {
        let len = self.points.len();
        let slot = self.points.get_mut(index).ok_or(PathError::IndexOutOfRange {
            what: "control point",
            index,
            len,
        })?;
        *slot = point;
        Ok(())
    }

    /// Returns the orientation keyframe at `index` (an anchor ordinal, not a point index).
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn orientation(&self, index: usize) -> Result<UnitQuaternion, PathError> {
        self.orientations
            .get(index)
            .copied()
            .ok_or(PathError::IndexOutOfRange {
                what: "orientation",
                index,
                len: self.orientations.len(),
            })
    }

    /// Overwrites the orientation keyframe at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_orientation(
        &mut self,
        index: usize,
        rotation: UnitQuaternion,
    ) -> Result<(), PathError> {
        let len = self.orientations.len();
        let slot = self
            .orientations
            .get_mut(index)
            .ok_or(PathError::IndexOutOfRange {
                what: "orientation",
                index,
                len,
            })?;
        *slot = rotation;
        Ok(())
    }

    /// Returns the four control points of segment `segment`.
    ///
    /// # Errors
    ///
    /// Returns an error if `segment >= segment_count()`.
    pub fn segment(&self, segment: usize) -> Result<CubicBezier, PathError> {
        let out_of_range = PathError::IndexOutOfRange {
            what: "segment",
            index: segment,
            len: self.segment_count(),
        };
        if segment >= self.segment_count() {
            return Err(out_of_range);
        }
        let base = segment * 3;
        match self.points.get(base..base + 4) {
            Some(&[p0, p1, p2, p3]) => Ok(CubicBezier::new(p0, p1, p2, p3)),
            _ => Err(out_of_range),
        }
    }

    /// Grows the path by one segment: two handles, one anchor and its keyframe.
    pub fn extend(&mut self, points: [Point3; 3], rotation: UnitQuaternion) {
        self.points.extend_from_slice(&points);
        self.orientations.push(rotation);
        debug_assert!(
            self.points.len() % 3 == 1 && self.orientations.len() == self.segment_count() + 1,
            "path structure broken: {} points, {} orientations",
            self.points.len(),
            self.orientations.len()
        );
        debug!(segments = self.segment_count(), "path extended");
    }
}
