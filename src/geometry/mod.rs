pub mod curve;
pub mod orientation;

pub use curve::{CubicBezier, Curve};
pub use orientation::interpolate_orientation;
