mod direction_at;
mod orientation_at;
mod position_at;

pub use direction_at::DirectionAt;
pub use orientation_at::OrientationAt;
pub use position_at::{PositionAt, VelocityAt};
