//! Rounding primitives
//!
//! All four rounding modes reduce to [`trunc`], which round-trips through the
//! signed counterpart. Inputs with `|x| >= 2^SIGNIFICAND_BITS` are already
//! integers and are returned unchanged, which also keeps the integer
//! conversion inside its range.
//!
//! # Edge Cases
//!
//! - NaN and infinities pass through unchanged
//! - `trunc(-0.5)` and `ceil(-0.5)` return `+0.0`, not `-0.0`
//! - `round` breaks ties toward positive infinity: `round(-1.5) == -1`

use crate::math::minmax::abs;
use crate::traits::{Float, Numeric, SignedInt};

#[inline(always)]
fn integer_limit<X: Float>() -> X {
    X::from_f64((1u64 << X::SIGNIFICAND_BITS) as f64)
}

/// Round toward zero.
///
/// # Example
///
/// ```rust
/// use vsl_math::{trunc, F32x4};
///
/// assert_eq!(trunc(-2.7f64), -2.0);
/// assert_eq!(trunc(F32x4::new([1.5, -1.5, 8e9, 0.25])).0, [1.0, -1.0, 8e9, 0.0]);
/// ```
#[inline(always)]
pub fn trunc<X: Float>(x: X) -> X {
    let integral = x.to_int().to_float();
    X::select(abs(x).cmp_lt(integer_limit()), integral, x)
}

/// Round toward negative infinity.
#[inline(always)]
pub fn floor<X: Float>(x: X) -> X {
    let t = trunc(x);
    let below = X::select(x.cmp_eq(t), t, t - X::ONE);
    X::select(x.cmp_ge(X::ZERO), t, below)
}

/// Round toward positive infinity.
#[inline(always)]
pub fn ceil<X: Float>(x: X) -> X {
    let f = floor(x);
    X::select(x.cmp_eq(f), f, f + X::ONE)
}

/// Round to nearest, ties toward positive infinity: `floor(x + 0.5)`.
///
/// # Example
///
/// ```rust
/// use vsl_math::round;
///
/// assert_eq!(round(1.5f32), 2.0);
/// assert_eq!(round(-1.5f32), -1.0);
/// ```
#[inline(always)]
pub fn round<X: Float>(x: X) -> X {
    floor(x + X::from_f64(0.5))
}

/// Truncate to the signed counterpart.
///
/// Out-of-range inputs saturate, NaN converts to 0.
#[inline(always)]
pub fn trunc_to_int<X: Float>(x: X) -> X::Int {
    x.to_int()
}

/// [`floor`] converted to the signed counterpart.
#[inline(always)]
pub fn floor_to_int<X: Float>(x: X) -> X::Int {
    floor(x).to_int()
}

/// [`ceil`] converted to the signed counterpart.
#[inline(always)]
pub fn ceil_to_int<X: Float>(x: X) -> X::Int {
    ceil(x).to_int()
}

/// [`round`] converted to the signed counterpart.
#[inline(always)]
pub fn round_to_int<X: Float>(x: X) -> X::Int {
    round(x).to_int()
}

/// Widen an integer back to its same-width float, the inverse of the
/// `*_to_int` functions for integral values.
#[inline(always)]
pub fn expand_to_float<I: SignedInt>(x: I) -> I::Float {
    x.to_float()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{F32x4, F64x2, I32x4};

    #[test]
    fn test_trunc_toward_zero() {
        assert_eq!(trunc(2.9f32), 2.0);
        assert_eq!(trunc(-2.9f32), -2.0);
        assert_eq!(trunc(0.999f64), 0.0);
    }

    #[test]
    fn test_trunc_large_values_unchanged() {
        let big = 16_777_217.0f64 * 1024.0;
        assert_eq!(trunc(big), big);
        assert_eq!(trunc(3.0e9f32), 3.0e9);
        assert_eq!(trunc(-1.0e300f64), -1.0e300);
    }

    #[test]
    fn test_trunc_specials() {
        assert!(trunc(f32::NAN).is_nan());
        assert_eq!(trunc(f64::INFINITY), f64::INFINITY);
        assert_eq!(trunc(f32::NEG_INFINITY), f32::NEG_INFINITY);
    }

    #[test]
    fn test_floor_ceil() {
        assert_eq!(floor(-0.5f64), -1.0);
        assert_eq!(floor(-2.0f64), -2.0);
        assert_eq!(floor(2.5f32), 2.0);
        assert_eq!(ceil(2.1f32), 3.0);
        assert_eq!(ceil(-2.1f32), -2.0);
        assert_eq!(ceil(4.0f64), 4.0);
    }

    #[test]
    fn test_round_ties_toward_positive_infinity() {
        assert_eq!(round(1.5f64), 2.0);
        assert_eq!(round(-1.5f64), -1.0);
        assert_eq!(round(2.5f32), 3.0);
        assert_eq!(round(-2.5f32), -2.0);
        assert_eq!(round(-2.6f32), -3.0);
    }

    #[test]
    fn test_rounding_vector_lanes() {
        let v = F64x2::new([-1.25, 7.75]);
        assert_eq!(floor(v).0, [-2.0, 7.0]);
        assert_eq!(ceil(v).0, [-1.0, 8.0]);
        assert_eq!(round(v).0, [-1.0, 8.0]);
    }

    #[test]
    fn test_to_int_variants() {
        assert_eq!(trunc_to_int(-3.7f32), -3);
        assert_eq!(floor_to_int(-3.2f64), -4);
        assert_eq!(ceil_to_int(3.2f32), 4);
        assert_eq!(round_to_int(F32x4::new([0.5, -0.5, 1.49, -1.51])), I32x4::new([1, 0, 1, -2]));
        assert_eq!(expand_to_float(floor_to_int(-3.2f64)), -4.0);
    }
}
