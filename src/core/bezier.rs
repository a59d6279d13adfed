use glam::DVec2;

use super::constants::{BEZIER_X, BEZIER_Y, VELOCITY_PRECISION};

/// First derivative of a one-dimensional cubic Bezier at `t`:
/// `3(1-t)²(p1-p0) + 6(1-t)t(p2-p1) + 3t²(p3-p2)`.
#[inline]
pub fn calculate_bezier_derivative(t: f64, p: [f64; 4]) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * (p[1] - p[0]) + 6.0 * u * t * (p[2] - p[1]) + 3.0 * t * t * (p[3] - p[2])
}

/// Tangent of the easing curve at `t` as `(dx/dt, dy/dt)`.
#[inline]
pub fn easing_tangent(t: f64) -> DVec2 {
    DVec2::new(
        calculate_bezier_derivative(t, BEZIER_X),
        calculate_bezier_derivative(t, BEZIER_Y),
    )
}

/// Eased speed multiplier at normalized gesture time `t`.
///
/// The negated slope `dy/dx` of the easing curve, rounded to four decimals.
/// Zero at both ends of the gesture with a single peak in between, so each
/// gesture eases in briefly and then decelerates over the longer tail.
pub fn calculate_speed_variation(t: f64) -> f64 {
    let tangent = easing_tangent(t);
    let slope = tangent.y / tangent.x;
    let v = -(slope * VELOCITY_PRECISION).round() / VELOCITY_PRECISION;
    // -0.0 at the endpoints reads badly in logs
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
