// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/path.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

mod builder;

pub use builder::PathBuilder;

pub use lyon::path as lyon_path;

use slicevg_core::{PathCommand, SlicePath};

use crate::fill::FillRule;

/// An immutable lyon path built from a [`SlicePath`].
#[derive(Debug, Clone)]
pub struct Path {
    pub raw: lyon::path::Path,
}

impl Path {
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    /// Replays every command of a [`SlicePath`] into a lyon path.
    ///
    /// Arcs are flattened into quadratic Béziers by lyon. Zero-radius arcs
    /// become straight lines.
    pub fn from_slice_path(path: &SlicePath) -> Self {
        log::trace!("building lyon path from {} slice commands", path.len());

        path.commands()
            .iter()
            .fold(PathBuilder::new(), |builder, cmd| match *cmd {
                PathCommand::MoveTo(to) => builder.move_to(to),
                PathCommand::LineTo(to) => builder.line_to(to),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => builder.arc_to(radius, large_arc, sweep, to),
                PathCommand::Close => builder.close(),
            })
            .build()
    }

    /// The recommended fill rule for slice outlines. Always
    /// [`FillRule::NonZero`].
    ///
    /// Full rings trace their inner circle opposite to the outer one, so
    /// [`FillRule::EvenOdd`] fills every slice outline the same way and
    /// callers are free to pick either.
    pub fn fill_rule(&self) -> FillRule {
        FillRule::NonZero
    }

    /// Returns the current [`Path`] with the given transform applied to it.
    pub fn transform(&self, transform: &lyon::path::math::Transform) -> Path {
        Path {
            raw: self.raw.clone().transformed(transform),
        }
    }
}

impl From<&SlicePath> for Path {
    fn from(path: &SlicePath) -> Self {
        Self::from_slice_path(path)
    }
}
