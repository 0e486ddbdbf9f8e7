pub mod error;
pub mod geometry;
pub mod math;
pub mod navigation;
pub mod operations;
pub mod path;
pub mod tessellation;

pub use error::{Result, RidepathError};
pub use path::{PathStore, RiderPath, RiderPose};
