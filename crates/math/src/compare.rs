//! Tolerance-based equality
//!
//! Every predicate is lane-wise and returns the mask of its input type, so
//! scalars get a `bool` and vectors get one answer per lane. All of them are
//! symmetric in `a` and `b`, and NaN is never equal to anything.
//!
//! # Example
//!
//! ```rust
//! use vsl_math::compare::{about_equal, bit_equal, rel_equal};
//! use vsl_math::F64x2;
//!
//! assert!(about_equal(0.1f32 + 0.2, 0.3));
//! assert!(rel_equal(1.0e9f64, 1.0e9 + 1.0, 1e-6));
//!
//! let a = F64x2::new([1.0, 2.0]);
//! let b = F64x2::new([1.0 + f64::EPSILON, -2.0]);
//! assert_eq!(bit_equal(a, b, 1).to_bools(), [true, false]);
//! ```

use crate::math::minmax::{abs, max};
use crate::traits::{Float, Integer, Mask, Numeric};

/// Tolerance used by [`about_equal`].
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// `|a - b| < tolerance`.
#[inline(always)]
pub fn abs_equal<X: Float>(a: X, b: X, tolerance: X) -> X::Mask {
    abs(a - b).cmp_lt(tolerance)
}

/// [`abs_equal`] with [`DEFAULT_TOLERANCE`].
#[inline(always)]
pub fn about_equal<X: Float>(a: X, b: X) -> X::Mask {
    abs_equal(a, b, X::from_f64(DEFAULT_TOLERANCE))
}

/// `|a - b| <= tolerance · max(|a|, |b|)`.
#[inline(always)]
pub fn rel_equal<X: Float>(a: X, b: X, tolerance: X) -> X::Mask {
    abs(a - b).cmp_le(tolerance * max(abs(a), abs(b)))
}

/// Equality up to the `tolerance_bits` lowest significand bits.
///
/// Lanes whose sign or exponent fields differ are never equal, so values
/// straddling a power of two compare unequal however close they are. Within
/// one binade the significands are XORed and the lane is equal when the
/// highest differing bit sits among the `tolerance_bits` lowest ones. NaN
/// lanes are never equal, even to an identical NaN.
#[inline(always)]
pub fn bit_equal<X: Float>(a: X, b: X, tolerance_bits: u32) -> X::Mask {
    let a_bits = a.to_bits();
    let b_bits = b.to_bits();
    let same_field = (a_bits >> X::SIGNIFICAND_BITS).cmp_eq(b_bits >> X::SIGNIFICAND_BITS);

    let significand_mask = <X::Bits as Integer>::splat_bits((1u64 << X::SIGNIFICAND_BITS) - 1);
    let difference = (a_bits ^ b_bits) & significand_mask;
    let needed_zeros = <X::Bits as Integer>::splat_bits(u64::from(
        <X::Bits as Integer>::BITS.saturating_sub(tolerance_bits),
    ));
    let close_enough = difference.count_leading_zeros().cmp_ge(needed_zeros);

    let ordered = a.cmp_eq(a).and(b.cmp_eq(b));

    ordered.and(same_field).and(close_enough)
}
