//! Planar points and the complex arithmetic the transform needs.
//!
//! Points and complex amplitudes share one representation: a `DVec2` whose
//! `x` is the real part and `y` the imaginary part. Complex multiplication is
//! `DVec2::rotate`, and `DVec2::from_angle` builds a unit phasor.

use glam::DVec2;

/// A sample on the drawing surface, origin at the viewport center.
pub type Point2D = DVec2;

/// Complex number stored as `(re, im)`.
pub type Complex = DVec2;

/// `e^{i·theta}`.
#[inline]
pub fn phasor(theta: f64) -> Complex {
    DVec2::from_angle(theta)
}

/// Complex product `a * b`.
#[inline]
pub fn complex_mul(a: Complex, b: Complex) -> Complex {
    a.rotate(b)
}

/// Smoothstep-like ramp used to blend panning in once zoom has progressed.
///
/// Returns 0 at level 0 and saturates at 1 from level π onward.
#[inline]
pub fn pan_easing(zoom_level: f64) -> f64 {
    (1.0 - zoom_level.clamp(0.0, std::f64::consts::PI).cos()) * 0.5
}
