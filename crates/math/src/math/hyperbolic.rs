//! Hyperbolic functions
//!
//! Padé approximants without range reduction: `[7/6]` for the odd `sinh` and
//! `tanh`, `[6/6]` for the even `cosh`. Accuracy falls off quickly outside
//! `[-2, 2]`; at `|x| = 3` the tangent is still within 1e-6.
//!
//! # Error Bounds on `[-2, 2]` (absolute)
//!
//! - f64: `sinh` 3e-8, `cosh` 3e-7, `tanh` 2e-8
//! - f32: every kernel within 6e-7

use crate::math::coefficients::{COSH_DEN, COSH_NUM, SINH_DEN, SINH_NUM, TANH_DEN, TANH_NUM};
use crate::math::{horner, odd_rational};
use crate::traits::Float;

/// Hyperbolic sine.
#[inline(always)]
pub fn sinh<X: Float>(x: X) -> X {
    odd_rational(x, &SINH_NUM, &SINH_DEN)
}

/// Hyperbolic cosine.
#[inline(always)]
pub fn cosh<X: Float>(x: X) -> X {
    let x2 = x * x;
    horner(x2, &COSH_NUM) / horner(x2, &COSH_DEN)
}

/// Hyperbolic tangent.
#[inline(always)]
pub fn tanh<X: Float>(x: X) -> X {
    odd_rational(x, &TANH_NUM, &TANH_DEN)
}
