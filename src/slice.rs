use slicevg_core::math::{point_on_circle, section_degrees, Point};
use slicevg_core::SlicePath;

use crate::error::SliceError;
use crate::ring::full_ring;

/// How the inner edge of a slice is drawn.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SliceMode {
    /// Collapse the slice to a point at the center. Only the outer corners
    /// are rounded.
    #[default]
    Wedge,
    /// Close the slice against an arc on the inner radius, rounding the
    /// inner corners as well. Falls back to [`SliceMode::Wedge`] when the
    /// inner radius is not greater than zero.
    Ring,
    /// [`SliceMode::Ring`] whenever `radius - thickness > 0`, otherwise
    /// [`SliceMode::Wedge`].
    Auto,
}

/// The parameters of a pie slice or donut segment.
///
/// Angles are in degrees, with 0° at 12 o'clock and positive angles turning
/// clockwise. Coordinates are in SVG's y-down space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceParams {
    pub center: Point,
    /// The outer radius.
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    /// The ring width. The inner radius is `radius - thickness`.
    pub thickness: f64,
    /// Requested rounding of the corners on the start edge. Clamped to
    /// `thickness / 2` when the path is built.
    pub corner_radius_start: f64,
    /// Requested rounding of the corners on the end edge. Clamped to
    /// `thickness / 2` when the path is built.
    pub corner_radius_end: f64,
    pub mode: SliceMode,
}

impl SliceParams {
    /// A slice with sharp corners drawn in [`SliceMode::Wedge`].
    pub fn new(
        center: impl Into<Point>,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        thickness: f64,
    ) -> Self {
        Self {
            center: center.into(),
            radius,
            start_deg,
            end_deg,
            thickness,
            corner_radius_start: 0.0,
            corner_radius_end: 0.0,
            mode: SliceMode::Wedge,
        }
    }

    /// Rounds the corners of both edges with the same radius.
    pub fn with_corner_radius(self, radius: f64) -> Self {
        self.with_corner_radii(radius, radius)
    }

    pub fn with_corner_radii(mut self, start: f64, end: f64) -> Self {
        self.corner_radius_start = start;
        self.corner_radius_end = end;
        self
    }

    pub fn with_mode(mut self, mode: SliceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn inner_radius(&self) -> f64 {
        self.radius - self.thickness
    }

    /// The angular extent of the slice in degrees.
    pub fn span(&self) -> f64 {
        (self.end_deg - self.start_deg).abs()
    }

    /// Whether the slice covers exactly one full turn and is drawn as a
    /// ring (or disc) regardless of its corner radii.
    pub fn is_full_ring(&self) -> bool {
        self.span() == 360.0
    }

    /// The corner radii actually used, each at most half the thickness.
    pub fn corner_radii(&self) -> (f64, f64) {
        (
            clamp_corner(self.corner_radius_start, self.thickness),
            clamp_corner(self.corner_radius_end, self.thickness),
        )
    }

    /// Whether the inner edge is drawn as an arc rather than collapsed to
    /// the center.
    pub fn draws_inner_arc(&self) -> bool {
        let has_hole = self.inner_radius() > 0.0;

        match self.mode {
            SliceMode::Wedge => false,
            SliceMode::Auto | SliceMode::Ring => has_hole,
        }
    }

    /// Checks that the parameters describe a real slice.
    ///
    /// The radius must be positive, the thickness within `0.0..=radius`,
    /// the angles and the center finite, and the corner radii
    /// non-negative.
    pub fn validate(&self) -> Result<(), SliceError> {
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(SliceError::NonFiniteCenter(self.center.x, self.center.y));
        }

        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SliceError::NonPositiveRadius(self.radius));
        }

        if !(0.0..=self.radius).contains(&self.thickness) {
            return Err(SliceError::InvalidThickness {
                thickness: self.thickness,
                radius: self.radius,
            });
        }

        if !self.start_deg.is_finite() || !self.end_deg.is_finite() {
            return Err(SliceError::NonFiniteAngle {
                start_deg: self.start_deg,
                end_deg: self.end_deg,
            });
        }

        for corner in [self.corner_radius_start, self.corner_radius_end] {
            if !corner.is_finite() || corner < 0.0 {
                return Err(SliceError::NegativeCornerRadius(corner));
            }
        }

        Ok(())
    }

    /// Builds the outline of the slice.
    ///
    /// Never fails: nonsensical parameters produce degenerate (possibly
    /// NaN) coordinates. Use [`SliceParams::try_path`] to reject them.
    pub fn path(&self) -> SlicePath {
        if self.is_full_ring() {
            log::trace!("slice spans 360°, drawing a full ring");
            return full_ring(self.center, self.radius, self.thickness);
        }

        let (cr_start, cr_end) = self.corner_radii();

        let mut path = SlicePath::new();
        outer_edge(&mut path, self, cr_start, cr_end);

        if self.draws_inner_arc() {
            inner_edge(&mut path, self, cr_start, cr_end);
        } else {
            if self.mode == SliceMode::Ring {
                log::debug!(
                    "inner radius {} leaves no hole, drawing ring slice as a wedge",
                    self.inner_radius()
                );
            }
            path.line_to(point_on_circle(self.center, 0.0, self.end_deg));
        }

        path.close();
        path
    }

    /// Validates the parameters, then builds the outline.
    pub fn try_path(&self) -> Result<SlicePath, SliceError> {
        self.validate()?;
        Ok(self.path())
    }
}

/// Returns the SVG path data of a pie slice.
///
/// The slice is drawn as a wedge that collapses to `center`, with the outer
/// corners rounded by `corner_radius_start` and `corner_radius_end` (each
/// clamped to `thickness / 2`). A span of exactly 360° yields a full ring,
/// or a disc when `thickness == radius`.
///
/// ```
/// let d = slicevg::generate_slice_path([0.0, 0.0], 10.0, 0.0, 90.0, 10.0, 0.0, 0.0);
/// assert!(d.starts_with("M ") && d.ends_with(" L 0 0 Z"));
/// ```
pub fn generate_slice_path(
    center: impl Into<Point>,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    thickness: f64,
    corner_radius_start: f64,
    corner_radius_end: f64,
) -> String {
    SliceParams::new(center, radius, start_deg, end_deg, thickness)
        .with_corner_radii(corner_radius_start, corner_radius_end)
        .path()
        .to_svg_string()
}

/// Like [`generate_slice_path`], but rejects invalid geometry instead of
/// emitting degenerate coordinates.
pub fn try_generate_slice_path(
    center: impl Into<Point>,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    thickness: f64,
    corner_radius_start: f64,
    corner_radius_end: f64,
) -> Result<String, SliceError> {
    SliceParams::new(center, radius, start_deg, end_deg, thickness)
        .with_corner_radii(corner_radius_start, corner_radius_end)
        .try_path()
        .map(|path| path.to_svg_string())
}

fn clamp_corner(requested: f64, thickness: f64) -> f64 {
    let max = thickness / 2.0;
    if requested > max {
        log::trace!("clamping corner radius {requested} to {max}");
    }
    max.min(requested)
}

/// The degrees a rounded corner takes away from an arc of `radius`. Zero
/// for a sharp corner so no sliver arc is drawn.
fn corner_section(corner_radius: f64, radius: f64) -> f64 {
    if corner_radius == 0.0 {
        0.0
    } else {
        section_degrees(corner_radius, radius)
    }
}

fn corner(path: &mut SlicePath, corner_radius: f64, to: Point) {
    if corner_radius != 0.0 {
        path.arc_to(corner_radius, false, true, to);
    }
}

/// Start butt, start corner, main outer arc, end corner, ending at the end
/// butt on the outer radius.
fn outer_edge(path: &mut SlicePath, p: &SliceParams, cr_start: f64, cr_end: f64) {
    let section_start = corner_section(cr_start, p.radius);
    let section_end = corner_section(cr_end, p.radius);

    let butt_start = point_on_circle(p.center, p.radius - cr_start, p.start_deg);
    let butt_end = point_on_circle(p.center, p.radius - cr_end, p.end_deg);

    let arc_start = point_on_circle(p.center, p.radius, p.start_deg + section_start);
    let arc_end = point_on_circle(p.center, p.radius, p.end_deg - section_end);

    let large_arc = p.span() > 180.0 + section_start + section_end;

    path.move_to(butt_start);
    corner(path, cr_start, arc_start);
    path.arc_to(p.radius, large_arc, true, arc_end);
    corner(path, cr_end, butt_end);
}

/// End butt on the inner radius, end corner, inner arc traced back towards
/// the start, start corner, ending at the start butt on the inner radius.
fn inner_edge(path: &mut SlicePath, p: &SliceParams, cr_start: f64, cr_end: f64) {
    let inner_radius = p.inner_radius();

    let section_start = corner_section(cr_start, inner_radius);
    let section_end = corner_section(cr_end, inner_radius);

    let butt_end = point_on_circle(p.center, inner_radius + cr_end, p.end_deg);
    let butt_start = point_on_circle(p.center, inner_radius + cr_start, p.start_deg);

    let arc_end = point_on_circle(p.center, inner_radius, p.end_deg - section_end);
    let arc_start = point_on_circle(p.center, inner_radius, p.start_deg + section_start);

    let large_arc = p.span() > 180.0 + section_start + section_end;

    path.line_to(butt_end);
    corner(path, cr_end, arc_end);
    path.arc_to(inner_radius, large_arc, false, arc_start);
    corner(path, cr_start, butt_start);
}
