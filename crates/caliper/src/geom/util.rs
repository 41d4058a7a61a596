//! Small vector helpers shared by the hull and calipers code.

use nalgebra::Vector2;

use super::types::Point;

/// Values within `tolerance` of zero become exactly zero.
#[inline]
pub fn snap_to_zero(value: f64, tolerance: f64) -> f64 {
    if value.abs() < tolerance {
        0.0
    } else {
        value
    }
}

/// Angle between two vectors via `acos(dot / (|u||v|))`, in [0, π].
///
/// NaN when either vector has zero length (the 0/0 ratio propagates through
/// the clamp); callers must not pass degenerate vectors. The clamp only
/// guards `acos` against rounding pushing the cosine past ±1.
#[inline]
pub fn angle_between(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    (u.dot(&v) / (u.norm() * v.norm())).clamp(-1.0, 1.0).acos()
}

/// Angle with the positive X axis, in [0, π].
///
/// `acos` cannot see the sign of the y-component; use
/// [`full_angle_with_x`] when the full turn matters.
#[inline]
pub fn angle_with_x(v: Vector2<f64>) -> f64 {
    angle_between(v, Vector2::x())
}

/// Angle with the positive X axis resolved to [0, 2π) by the sign of `v.y`.
#[inline]
pub fn full_angle_with_x(v: Vector2<f64>) -> f64 {
    let a = angle_with_x(v);
    if v.y < 0.0 {
        std::f64::consts::TAU - a
    } else {
        a
    }
}

/// Twice the signed area of triangle `a, b, c`; positive for a CCW turn.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    ab.x * ac.y - ab.y * ac.x
}

/// Strict counter-clockwise turn `a -> b -> c` (collinear excluded).
#[inline]
pub fn is_ccw_turn(a: Point, b: Point, c: Point) -> bool {
    cross(a, b, c) > 0.0
}
