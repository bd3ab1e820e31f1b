//! Modulo and range wrapping

use crate::math::round::{floor, trunc};
use crate::traits::{Float, Numeric};

/// Remainder of `x / y` with the sign of `x`: `x - trunc(x / y) * y`.
///
/// # Domain
///
/// `y != 0`. Precision degrades once `x / y` exceeds `2^SIGNIFICAND_BITS`.
#[inline(always)]
pub fn fmod<X: Float>(x: X, y: X) -> X {
    x - trunc(x / y) * y
}

/// Fractional part `x - floor(x)`, in `[0, 1)`.
///
/// A tiny negative `x` makes `x - floor(x)` round up to exactly 1; that case
/// maps to 0, the equivalent point of the unit circle.
#[inline(always)]
pub fn wrap<X: Float>(x: X) -> X {
    let frac = x - floor(x);
    X::select(frac.cmp_ge(X::ONE), X::ZERO, frac)
}

/// Wrap `x` into `[a, b)`.
///
/// The input is rescaled to units of `b - a`, wrapped with [`wrap`] and
/// scaled back, so any distance outside the range works, in either direction.
///
/// # Domain
///
/// `a < b`.
///
/// # Example
///
/// ```rust
/// use vsl_math::wrap_range;
/// use core::f64::consts::PI;
///
/// let v = wrap_range(5.0 * PI, 0.0, 2.0 * PI);
/// assert!((v - PI).abs() < 1e-9);
/// ```
#[inline(always)]
pub fn wrap_range<X: Float>(x: X, a: X, b: X) -> X {
    let range = b - a;
    let v = range * wrap((x - a) / range) + a;
    X::select(v.cmp_ge(b), a, v)
}
