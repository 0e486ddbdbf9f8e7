use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::Curve;

/// One cubic Bezier segment: anchor, two handles, anchor.
///
/// The curve passes through `p0` and `p3` only; `p1` and `p2` shape the
/// tangents at the two ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl CubicBezier {
    /// Creates a segment from its four control points.
    #[must_use]
    pub const fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the Bernstein form at local parameter `t` (clamped to `[0, 1]`).
    #[allow(clippy::many_single_char_names)]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        let a = s * s * s;
        let b = 3.0 * s * s * t;
        let c = 3.0 * s * t * t;
        let d = t * t * t;
        Point3::from(
            self.p0.coords * a + self.p1.coords * b + self.p2.coords * c + self.p3.coords * d,
        )
    }

    /// First derivative with respect to the local parameter.
    ///
    /// This is the quadratic Bezier over the control-point differences,
    /// scaled by 3. It is zero where consecutive control points coincide.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector3 {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * s * s)
            + (self.p2 - self.p1) * (6.0 * s * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }
}

impl Curve for CubicBezier {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.point_at(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let velocity = self.derivative(t);
        let len = velocity.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(velocity / len)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn arch() -> CubicBezier {
        CubicBezier::new(p(0.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(4.0, 2.0, 0.0), p(4.0, 0.0, 0.0))
    }

    #[test]
    fn endpoints_are_exact() {
        let curve = arch();
        assert_eq!(curve.point_at(0.0), curve.p0);
        assert_eq!(curve.point_at(1.0), curve.p3);
    }

    #[test]
    fn straight_line_midpoint() {
        let curve = CubicBezier::new(
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(3.0, 0.0, 0.0),
        );
        assert_eq!(curve.point_at(0.5), p(1.5, 0.0, 0.0));
    }

    #[test]
    fn matches_bernstein_formula() {
        let curve = arch();
        let t: f64 = 0.3;
        let s = 1.0 - t;
        let expected = curve.p0.coords * s.powi(3)
            + curve.p1.coords * (3.0 * s * s * t)
            + curve.p2.coords * (3.0 * s * t * t)
            + curve.p3.coords * t.powi(3);
        assert_relative_eq!(curve.point_at(t).coords, expected, epsilon = 1e-12);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let curve = arch();
        let h = 1e-6;
        let t = 0.4;
        let numeric = (curve.point_at(t + h) - curve.point_at(t - h)) / (2.0 * h);
        assert_relative_eq!(curve.derivative(t), numeric, epsilon = 1e-6);
    }

    #[test]
    fn derivative_at_ends_follows_handles() {
        let curve = arch();
        assert_relative_eq!(curve.derivative(0.0), (curve.p1 - curve.p0) * 3.0);
        assert_relative_eq!(curve.derivative(1.0), (curve.p3 - curve.p2) * 3.0);
    }

    #[test]
    fn tangent_is_unit_length() {
        let tangent = arch().tangent(0.5).unwrap();
        assert_relative_eq!(tangent.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tangent, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_have_no_tangent() {
        let a = p(1.0, 1.0, 1.0);
        let curve = CubicBezier::new(a, a, a, a);
        assert!(matches!(
            curve.tangent(0.5),
            Err(crate::error::RidepathError::Geometry(GeometryError::ZeroVector))
        ));
    }

    #[test]
    fn evaluate_clamps_parameter() {
        let curve = arch();
        assert_eq!(curve.evaluate(-1.0).unwrap(), curve.p0);
        assert_eq!(curve.evaluate(2.0).unwrap(), curve.p3);
        assert_eq!(curve.evaluate(0.25).unwrap(), curve.point_at(0.25));
    }
}
