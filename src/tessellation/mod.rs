mod tessellate_path;

pub use tessellate_path::TessellatePath;

use crate::math::Point3;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Number of line pieces each cubic segment is split into.
    pub samples_per_segment: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            samples_per_segment: 16,
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}
