//! SVG path data for pie slices and donut segments.
//!
//! ```
//! use slicevg::{SliceMode, SliceParams};
//!
//! let params = SliceParams::new([50.0, 50.0], 40.0, 30.0, 150.0, 12.0)
//!     .with_corner_radius(4.0)
//!     .with_mode(SliceMode::Ring);
//!
//! let d = params.path().to_svg_string_with_precision(3);
//! assert!(d.starts_with('M') && d.ends_with('Z'));
//! ```

mod ring;
mod slice;

pub mod error;

pub use error::SliceError;
pub use slice::{generate_slice_path, try_generate_slice_path, SliceMode, SliceParams};

pub use slicevg_core::*;

#[cfg(feature = "tessellation")]
pub use slicevg_tessellation as tessellation;
