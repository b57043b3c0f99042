pub mod math;
pub mod path;

pub use path::{PathCommand, PathToken, SlicePath};
