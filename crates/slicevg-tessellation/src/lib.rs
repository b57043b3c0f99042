//! Convert slicevg paths into [`lyon`] paths.
//!
//! The resulting [`Path`] can be handed to a lyon `FillTessellator` together
//! with [`Path::fill_rule`] to turn a slice into triangles.

pub mod fill;
pub mod path;

pub use fill::FillRule;
pub use path::{Path, PathBuilder};

pub use lyon;
