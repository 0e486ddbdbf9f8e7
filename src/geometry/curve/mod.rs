mod cubic_bezier;

pub use cubic_bezier::CubicBezier;

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Trait for parametric curves in 3D space over the parameter range `[0, 1]`.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<Vector3>;
}
