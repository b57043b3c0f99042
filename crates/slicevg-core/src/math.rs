use std::f64::consts::TAU;

pub use euclid;

/// A point in the path's coordinate space (y pointing down, as in SVG).
///
/// Alias for ```euclid::default::Point2D<f64>```.
pub type Point = euclid::default::Point2D<f64>;

/// An angle in radians (f64).
///
/// Alias for ```euclid::Angle<f64>```.
pub type Angle = euclid::Angle<f64>;

/// Converts a slice angle in degrees (0° at 12 o'clock, clockwise) into a
/// screen-space angle measured from the positive x-axis.
#[inline]
pub fn screen_angle(deg: f64) -> Angle {
    Angle::degrees(deg - 90.0)
}

/// Returns the point at `radius` from `center` at the given angle in degrees.
///
/// 0° points straight up from `center` and positive angles rotate clockwise,
/// so `point_on_circle(c, r, 90.0)` is the rightmost point of the circle.
/// A radius of `0.0` yields `center` itself.
pub fn point_on_circle(center: Point, radius: f64, deg: f64) -> Point {
    let radians = screen_angle(deg).radians;

    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// The angular span in degrees that an arc of length `length` subtends on a
/// circle of `radius`.
///
/// Used to inset the main arc of a slice far enough to make room for a
/// rounded corner of radius `length`.
#[inline]
pub fn section_degrees(length: f64, radius: f64) -> f64 {
    360.0 * (length / (TAU * radius))
}
