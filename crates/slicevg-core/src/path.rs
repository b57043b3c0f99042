//! Structured SVG path data.
//!
//! A [`SlicePath`] is the ordered trace of pen movements that outlines a
//! slice. It serializes to the compact `d` attribute syntax of an SVG
//! `<path>` element, with every op-code and operand separated by one space.

use smallvec::SmallVec;
use std::fmt::{self, Write};

use crate::math::Point;

/// Enough room for the longest slice outline (a rounded ring segment)
/// without spilling onto the heap.
const INIT_COMMANDS_SIZE: usize = 10;

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    /// Start a new sub-path at a point.
    MoveTo(Point),
    /// A circular arc from the current position to `to`.
    ///
    /// Serialized as `A radius radius 0 large_arc sweep to.x to.y`.
    ArcTo {
        radius: f64,
        /// Take the arc spanning more than 180°.
        large_arc: bool,
        /// Trace the arc clockwise (in y-down space).
        sweep: bool,
        to: Point,
    },
    /// A straight line from the current position to a point.
    LineTo(Point),
    /// Close the current sub-path.
    Close,
}

impl PathCommand {
    /// The SVG op-code of this command.
    pub fn op(&self) -> char {
        match self {
            Self::MoveTo(_) => 'M',
            Self::ArcTo { .. } => 'A',
            Self::LineTo(_) => 'L',
            Self::Close => 'Z',
        }
    }

    /// The point the pen ends up at, if the command moves it.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(*p),
            Self::ArcTo { to, .. } => Some(*to),
            Self::Close => None,
        }
    }

    fn push_tokens(&self, tokens: &mut Vec<PathToken>) {
        tokens.push(PathToken::Op(self.op()));

        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => {
                tokens.push(PathToken::Number(p.x));
                tokens.push(PathToken::Number(p.y));
            }
            Self::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => {
                tokens.extend_from_slice(&[
                    PathToken::Number(radius),
                    PathToken::Number(radius),
                    PathToken::Number(0.0),
                    PathToken::flag(large_arc),
                    PathToken::flag(sweep),
                    PathToken::Number(to.x),
                    PathToken::Number(to.y),
                ]);
            }
            Self::Close => {}
        }
    }
}

/// One element of the flat, pre-join representation of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathToken {
    Op(char),
    Number(f64),
}

impl PathToken {
    fn flag(set: bool) -> Self {
        Self::Number(if set { 1.0 } else { 0.0 })
    }

    fn write_to(&self, w: &mut impl Write, precision: Option<usize>) -> fmt::Result {
        match *self {
            Self::Op(op) => w.write_char(op),
            Self::Number(n) => write_number(w, n, precision),
        }
    }
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        self.write_to(f, precision)
    }
}

/// The outline of a slice as a sequence of [`PathCommand`]s.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlicePath {
    commands: SmallVec<[PathCommand; INIT_COMMANDS_SIZE]>,
}

impl SlicePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, to: Point) {
        self.commands.push(PathCommand::MoveTo(to));
    }

    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo(to));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands with the given op-code.
    pub fn count(&self, op: char) -> usize {
        self.commands.iter().filter(|c| c.op() == op).count()
    }

    /// The flat token array that [`SlicePath::to_svg_string`] joins.
    pub fn tokens(&self) -> Vec<PathToken> {
        // An arc is the widest command: one op-code and seven operands.
        let mut tokens = Vec::with_capacity(self.commands.len() * 8);
        for cmd in self.commands.iter() {
            cmd.push_tokens(&mut tokens);
        }
        tokens
    }

    /// Serializes to SVG path data using the shortest round-trip
    /// representation of every operand.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }

    /// Serializes to SVG path data with every operand rounded to at most
    /// `precision` fractional digits.
    ///
    /// Trailing zeros are trimmed and negative zero is written as `0`, so
    /// `to_svg_string_with_precision(3)` of a quarter slice reads
    /// `M 0 -10 A 10 10 0 0 1 10 0 L 0 0 Z`.
    pub fn to_svg_string_with_precision(&self, precision: usize) -> String {
        format!("{self:.precision$}")
    }
}

impl fmt::Display for SlicePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        for (i, token) in self.tokens().iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            token.write_to(f, precision)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SlicePath {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl FromIterator<PathCommand> for SlicePath {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

fn write_number(w: &mut impl Write, n: f64, precision: Option<usize>) -> fmt::Result {
    let Some(precision) = precision else {
        return write!(w, "{}", n);
    };

    let mut s = format!("{:.*}", precision, n);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }

    if s == "-0" {
        w.write_char('0')
    } else {
        w.write_str(&s)
    }
}
