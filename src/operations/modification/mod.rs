mod append_segment;
mod continuity;
mod set_orientation;
mod set_point;

pub use append_segment::{AppendSegment, AppendedSegment};
pub use continuity::EnforceContinuity;
pub use set_orientation::SetOrientation;
pub use set_point::SetPoint;
