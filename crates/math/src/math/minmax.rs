//! Select-based abs, min, max, clamp and sign
//!
//! These work for every numeric type the comparison applies to, integers
//! included.

use crate::traits::{Numeric, Signed};

/// Absolute value: `select(x >= 0, x, -x)`.
///
/// Signed integer `MIN` has no positive counterpart and wraps for vectors.
#[inline(always)]
pub fn abs<X: Signed>(x: X) -> X {
    X::select(x.cmp_ge(X::ZERO), x, -x)
}

/// Lane-wise minimum. Returns `b` when the lanes are unordered.
#[inline(always)]
pub fn min<X: Numeric>(a: X, b: X) -> X {
    X::select(a.cmp_lt(b), a, b)
}

/// Lane-wise maximum. Returns `b` when the lanes are unordered.
#[inline(always)]
pub fn max<X: Numeric>(a: X, b: X) -> X {
    X::select(a.cmp_gt(b), a, b)
}

/// Restrict `x` to `[lo, hi]`.
///
/// # Domain
///
/// `lo <= hi`. The bounds are not swapped when reversed.
#[inline(always)]
pub fn clamp<X: Numeric>(x: X, lo: X, hi: X) -> X {
    min(max(x, lo), hi)
}

/// `1`, `-1` or `0` for positive, negative and zero lanes (NaN gives 0).
#[inline(always)]
pub fn sign<X: Signed>(x: X) -> X {
    let non_positive = X::select(x.cmp_lt(X::ZERO), X::NEG_ONE, X::ZERO);
    X::select(x.cmp_gt(X::ZERO), X::ONE, non_positive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{F32x4, I32x4, U64x2};

    #[test]
    fn test_abs() {
        assert_eq!(abs(-3.5f32), 3.5);
        assert_eq!(abs(4i64), 4);
        assert_eq!(abs(I32x4::new([-1, 2, -3, 0])).0, [1, 2, 3, 0]);
    }

    #[test]
    fn test_min_max_integers() {
        assert_eq!(min(3u32, 9), 3);
        assert_eq!(max(-3i32, -9), -3);
        let a = U64x2::new([1, 50]);
        let b = U64x2::new([10, 5]);
        assert_eq!(min(a, b).0, [1, 5]);
        assert_eq!(max(a, b).0, [10, 50]);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.5f64, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5f64, 0.0, 1.0), 0.0);
        let v = F32x4::new([-2.0, 0.25, 0.75, 3.0]);
        assert_eq!(clamp(v, F32x4::ZERO, F32x4::ONE).0, [0.0, 0.25, 0.75, 1.0]);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(-0.1f32), -1.0);
        assert_eq!(sign(0.0f64), 0.0);
        assert_eq!(sign(17i32), 1);
        assert_eq!(sign(F32x4::new([2.0, -2.0, 0.0, -0.0])).0, [1.0, -1.0, 0.0, 0.0]);
        assert_eq!(sign(f64::NAN), 0.0);
    }
}
