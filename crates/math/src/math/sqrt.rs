//! Square root
//!
//! # Algorithm
//!
//! Halving the bit pattern halves the exponent, so
//! `(bits >> 1) + (bias << (SIGNIFICAND_BITS - 1))` is a piecewise-linear
//! estimate of `√x` within 6% for every normal `x`. Four Newton steps
//! `r = (r + x / r) / 2` take that to full precision for both widths.
//!
//! # Error Bounds
//!
//! - f32: within 1 ulp
//! - f64: relative error < 1e-15
//!
//! # Domain
//!
//! Normal, non-negative `x`. Zero and `+∞` are returned as is; negative
//! and subnormal inputs give meaningless results.

use crate::math::coefficients::SQRT_STEPS;
use crate::traits::{Float, Integer, Mask};

/// Square root by bit-level seed plus Newton iteration.
#[inline(always)]
pub fn sqrt<X: Float>(x: X) -> X {
    let magic = <X::Bits as Integer>::splat_bits(
        u64::from(X::EXPONENT_BIAS) << (X::SIGNIFICAND_BITS - 1),
    );
    let half = X::from_f64(0.5);
    let mut r = X::from_bits((x.to_bits() >> 1).wrapping_add(magic));
    for _ in 0..SQRT_STEPS {
        r = half * (r + x / r);
    }
    let passthrough = x.cmp_eq(X::ZERO).or(x.cmp_eq(X::from_f64(f64::INFINITY)));
    X::select(passthrough, x, r)
}
