//! Base-2 exponential and logarithm
//!
//! Both kernels split the IEEE 754 representation into its exponent and
//! significand and only approximate the significand part.
//!
//! # Algorithm
//!
//! ## exp2
//!
//! 1. `n = round(x)`, `f = x - n`, so `f ∈ [-0.5, 0.5]`
//! 2. `2^n` is built directly by writing `n + bias` into the exponent field
//! 3. `2^f` is a degree-7 minimax polynomial with `P(0) = 1`
//! 4. `exp2(x) = 2^n · 2^f`
//!
//! ## log2
//!
//! 1. `x = 2^e · m` with `m ∈ [1, 2)`, read straight from the bits
//! 2. `log2(m) = t · P(t)`, `t = m - 1`, a degree-10 minimax polynomial
//! 3. `log2(x) = e + log2(m)`
//!
//! # Error Bounds
//!
//! - `exp2`: relative error < 2e-10 (f64), < 1e-7 (f32) for `|x| <= 20`
//! - `log2`: absolute error < 5e-9 (f64), < 7e-7 (f32)
//! - Integer inputs to `exp2` and powers of two for `log2` are exact
//!
//! # Domain
//!
//! `exp2`: `x` whose result is a normal float. The exponent arithmetic wraps,
//! so overflowing inputs produce garbage rather than infinity.
//!
//! `log2`: positive normal `x`.
//!
//! # Example
//!
//! ```rust
//! use vsl_math::{exp2, log2, F32x4};
//!
//! assert_eq!(exp2(3.0f64), 8.0);
//! assert_eq!(log2(0.25f32), -2.0);
//!
//! let x = F32x4::new([1.0, 2.0, 10.0, 0.5]);
//! let roundtrip = exp2(log2(x));
//! for lane in 0..4 {
//!     assert!((roundtrip.0[lane] - x.0[lane]).abs() < 1e-5 * x.0[lane]);
//! }
//! ```

use crate::math::coefficients::{EXP2, LOG2};
use crate::math::horner;
use crate::math::round::round;
use crate::traits::{Float, Integer, SignedInt, UnsignedInt};

/// `2^x`.
#[inline(always)]
pub fn exp2<X: Float>(x: X) -> X {
    let n = round(x);
    let f = x - n;

    let bias = <X::Int as Integer>::splat_bits(u64::from(X::EXPONENT_BIAS));
    let biased = n.to_int().wrapping_add(bias);
    let scale = X::from_bits((biased << X::SIGNIFICAND_BITS).to_unsigned());

    scale * horner(f, &EXP2)
}

/// `log2(x)`.
#[inline(always)]
pub fn log2<X: Float>(x: X) -> X {
    let bits = x.to_bits();
    let exponent = (bits >> X::SIGNIFICAND_BITS).to_float() - X::from_f64(f64::from(X::EXPONENT_BIAS));

    let significand_mask = <X::Bits as Integer>::splat_bits((1u64 << X::SIGNIFICAND_BITS) - 1);
    let one_exponent =
        <X::Bits as Integer>::splat_bits(u64::from(X::EXPONENT_BIAS) << X::SIGNIFICAND_BITS);
    let m = X::from_bits((bits & significand_mask) | one_exponent);
    let t = m - X::ONE;

    exponent + t * horner(t, &LOG2)
}
