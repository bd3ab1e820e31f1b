//! Exponentials and logarithms in other bases, built on [`exp2`] and [`log2`]
//!
//! | Function      | Definition              |
//! |---------------|-------------------------|
//! | `exp(x)`      | `exp2(x · log2(e))`     |
//! | `log(x)`      | `log2(x) · ln(2)`       |
//! | `log10(x)`    | `log2(x) · log10(2)`    |
//! | `log_b(b, x)` | `log2(x) / log2(b)`     |
//! | `pow(x, y)`   | `exp2(log2(x) · y)`     |
//!
//! Errors compound from the base-2 kernels: `exp` and `pow` keep roughly
//! 5e-7 relative error in f32, `log` and `log10` stay below 1e-6 absolute.
//!
//! # Domain
//!
//! Same as the underlying kernels: logarithm arguments and the base of `pow`
//! must be positive normal floats.

use core::f64::consts::{LN_2, LOG10_2, LOG2_E};

use crate::math::exp2_log2::{exp2, log2};
use crate::traits::Float;

/// `e^x`.
#[inline(always)]
pub fn exp<X: Float>(x: X) -> X {
    exp2(X::from_f64(LOG2_E) * x)
}

/// Natural logarithm.
#[inline(always)]
pub fn log<X: Float>(x: X) -> X {
    X::from_f64(LN_2) * log2(x)
}

/// Base-10 logarithm.
#[inline(always)]
pub fn log10<X: Float>(x: X) -> X {
    X::from_f64(LOG10_2) * log2(x)
}

/// Logarithm of `x` in base `base`.
#[inline(always)]
pub fn log_b<X: Float>(base: X, x: X) -> X {
    log2(x) / log2(base)
}

/// `x^y` for positive `x`.
///
/// # Example
///
/// ```rust
/// use vsl_math::pow;
///
/// assert!((pow(2.0f32, 1.5) - 2.828427).abs() < 1e-6);
/// ```
#[inline(always)]
pub fn pow<X: Float>(x: X, y: X) -> X {
    exp2(log2(x) * y)
}
