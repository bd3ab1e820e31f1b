//! Approximation kernels
//!
//! Every kernel is generic over [`Float`](crate::Float), so one definition
//! serves `f32`, `f64`, `F32x4` and `F64x2`. Vector lanes are computed
//! independently and branch-free: conditionals go through `select`.
//!
//! # Module Organization
//!
//! - `round`: `trunc`, `floor`, `ceil`, `round` and their integer-returning forms
//! - `wrap`: `fmod`, unit and range wrapping
//! - `trig`: `sin`, `cos`, `tan` (plus wrapping variants)
//! - `inverse`: `asin`, `acos`, `atan`, `atan2`
//! - `hyperbolic`: `sinh`, `cosh`, `tanh`
//! - `exp2_log2`: the bit-level `exp2` and `log2` everything exponential builds on
//! - `exp_log`: `exp`, `log`, `log10`, `log_b`, `pow`
//! - `sqrt`: bit-seeded Newton square root
//! - `minmax`: `abs`, `min`, `max`, `clamp`, `sign`
//!
//! # Domains
//!
//! Kernels never check their inputs. Each function documents the domain its
//! error bound holds on; outside it the result is whatever the arithmetic
//! produces.

pub(crate) mod coefficients;

pub mod exp2_log2;
pub mod exp_log;
pub mod hyperbolic;
pub mod inverse;
pub mod minmax;
pub mod round;
pub mod sqrt;
pub mod trig;
pub mod wrap;

pub use exp2_log2::{exp2, log2};
pub use exp_log::{exp, log, log10, log_b, pow};
pub use hyperbolic::{cosh, sinh, tanh};
pub use inverse::{acos, asin, atan, atan2};
pub use minmax::{abs, clamp, max, min, sign};
pub use round::{
    ceil, ceil_to_int, expand_to_float, floor, floor_to_int, round, round_to_int, trunc, trunc_to_int,
};
pub use sqrt::sqrt;
pub use trig::{cos, cos_wrapped, sin, sin_wrapped, tan, tan_wrapped};
pub use wrap::{fmod, wrap, wrap_range};

use crate::traits::Float;

/// Horner evaluation of `c[0] + c[1]·x + … + c[n]·x^n`.
#[inline(always)]
pub(crate) fn horner<X: Float>(x: X, coefficients: &[f64]) -> X {
    let mut rest = coefficients.iter().rev();
    let init = rest.next().map_or(X::ZERO, |&c| X::from_f64(c));
    rest.fold(init, |acc, &c| acc * x + X::from_f64(c))
}

/// `x · N(x²) / D(x²)`, the shape of every odd rational kernel.
#[inline(always)]
pub(crate) fn odd_rational<X: Float>(x: X, numerator: &[f64], denominator: &[f64]) -> X {
    let x2 = x * x;
    x * horner(x2, numerator) / horner(x2, denominator)
}
