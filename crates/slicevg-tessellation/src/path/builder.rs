// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/path/builder.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

use super::Path;

use slicevg_core::math::Point;

use lyon::math;
use lyon::path::builder::{self, SvgPathBuilder};

/// A [`Path`] builder that speaks the same commands as a slice outline.
///
/// Once a [`Path`] is built, it can no longer be mutated.
pub struct PathBuilder {
    pub raw: builder::WithSvg<lyon::path::path::BuilderImpl>,
}

impl PathBuilder {
    /// Creates a new [`PathBuilder`].
    pub fn new() -> Self {
        Self {
            raw: lyon::path::Path::builder().with_svg(),
        }
    }

    /// Moves the starting point of a new sub-path to the given `Point`.
    ///
    /// An unclosed sub-path before it is ended without closing.
    pub fn move_to(mut self, point: Point) -> Self {
        let _ = self.raw.move_to(to_lyon(point));
        self
    }

    /// Connects the last point in the [`Path`] to the given `Point` with a
    /// straight line.
    pub fn line_to(mut self, point: Point) -> Self {
        let _ = self.raw.line_to(to_lyon(point));
        self
    }

    /// Adds a circular arc from the current position to `to`, using the
    /// flags of an SVG `A` command.
    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> Self {
        let radius = radius as f32;

        self.raw.arc_to(
            math::Vector::new(radius, radius),
            math::Angle::radians(0.0),
            lyon::path::ArcFlags { large_arc, sweep },
            to_lyon(to),
        );

        self
    }

    /// Closes the current sub-path in the [`Path`] with a straight line to
    /// the starting point.
    pub fn close(mut self) -> Self {
        self.raw.close();
        self
    }

    /// Builds the [`Path`] of this [`PathBuilder`].
    pub fn build(self) -> Path {
        Path {
            raw: self.raw.build(),
        }
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn to_lyon(point: Point) -> math::Point {
    math::Point::new(point.x as f32, point.y as f32)
}
