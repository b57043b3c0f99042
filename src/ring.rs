use slicevg_core::math::Point;
use slicevg_core::SlicePath;

/// Outlines a full 360° ring of outer radius `radius` and width `thickness`.
///
/// A single arc cannot describe a closed circle (its end points coincide),
/// so each circle is drawn as two half-circle arcs from its leftmost point
/// to its rightmost point and back. The outer circle is traced clockwise and
/// the inner one counter-clockwise, which cuts the hole under both the
/// nonzero and even-odd fill rules.
///
/// The inner circle is emitted even when `thickness == radius`; a zero
/// radius loop leaves the disc filled.
pub(crate) fn full_ring(center: Point, radius: f64, thickness: f64) -> SlicePath {
    let inner_radius = radius - thickness;

    let mut path = SlicePath::new();

    circle(&mut path, center, radius, true);
    circle(&mut path, center, inner_radius, false);
    path.close();

    path
}

fn circle(path: &mut SlicePath, center: Point, radius: f64, clockwise: bool) {
    let left = Point::new(center.x - radius, center.y);
    let right = Point::new(center.x + radius, center.y);

    path.move_to(left);
    path.arc_to(radius, true, clockwise, right);
    path.arc_to(radius, true, clockwise, left);
}
