//! Sine, cosine and tangent
//!
//! # Algorithm
//!
//! - `sin(x) = x · S(x²)` and `cos(x) = C(x²)`: minimax polynomials of order 6
//!   in `x²`, fitted on `[-π, π]`
//! - `tan(x) = x · N(x²) / D(x²)`: the `[7/6]` Padé approximant, accurate on
//!   `[-π/2, π/2]` up to the poles
//!
//! No range reduction happens in the plain kernels. The `_wrapped` variants
//! first map the argument into the fitted domain with
//! [`wrap_range`](crate::math::wrap_range).
//!
//! # Error Bounds (absolute)
//!
//! | Kernel | Domain        | f64     | f32     |
//! |--------|---------------|---------|---------|
//! | `sin`  | `[-π, π]`     | 2.6e-7  | 5e-7    |
//! | `cos`  | `[-π, π]`     | 1.8e-7  | 5e-7    |
//! | `tan`  | `[-1.2, 1.2]` | 1e-9    | 2e-6    |
//!
//! Near `±π/2` the tangent keeps a relative error around 3e-6.
//!
//! # Example
//!
//! ```rust
//! use vsl_math::{sin, cos_wrapped, F32x4};
//!
//! let x = F32x4::new([0.0, 0.5, -1.0, 3.0]);
//! let s = sin(x);
//! assert!((s.0[1] - 0.5f32.sin()).abs() < 1e-6);
//!
//! // 20π + 1 lies far outside [-π, π]
//! let c = cos_wrapped(20.0 * core::f64::consts::PI + 1.0);
//! assert!((c - 1.0f64.cos()).abs() < 1e-6);
//! ```

use core::f64::consts::{FRAC_PI_2, PI};

use crate::math::coefficients::{COS, SIN, TAN_DEN, TAN_NUM};
use crate::math::wrap::wrap_range;
use crate::math::{horner, odd_rational};
use crate::traits::Float;

/// Sine for `x` in `[-π, π]`.
#[inline(always)]
pub fn sin<X: Float>(x: X) -> X {
    x * horner(x * x, &SIN)
}

/// Cosine for `x` in `[-π, π]`.
#[inline(always)]
pub fn cos<X: Float>(x: X) -> X {
    horner(x * x, &COS)
}

/// Tangent for `x` in `[-π/2, π/2]`.
#[inline(always)]
pub fn tan<X: Float>(x: X) -> X {
    odd_rational(x, &TAN_NUM, &TAN_DEN)
}

/// Sine for any finite `x`, wrapped into `[-π, π)` first.
#[inline(always)]
pub fn sin_wrapped<X: Float>(x: X) -> X {
    sin(wrap_range(x, X::from_f64(-PI), X::from_f64(PI)))
}

/// Cosine for any finite `x`, wrapped into `[-π, π)` first.
#[inline(always)]
pub fn cos_wrapped<X: Float>(x: X) -> X {
    cos(wrap_range(x, X::from_f64(-PI), X::from_f64(PI)))
}

/// Tangent for any finite `x`, wrapped into `[-π/2, π/2)` first.
#[inline(always)]
pub fn tan_wrapped<X: Float>(x: X) -> X {
    tan(wrap_range(x, X::from_f64(-FRAC_PI_2), X::from_f64(FRAC_PI_2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{F32x4, F64x2};

    #[test]
    fn test_trig_at_zero() {
        assert_eq!(sin(0.0f32), 0.0);
        assert_eq!(cos(0.0f32), 1.0);
        assert_eq!(tan(0.0f32), 0.0);
        assert_eq!(sin(0.0f64), 0.0);
        assert_eq!(cos(0.0f64), 1.0);
        assert_eq!(tan(0.0f64), 0.0);
    }

    #[test]
    fn test_sin_cos_accuracy() {
        for i in -100..=100 {
            let x = i as f64 * PI / 100.0;
            let sin_error = (sin(x) - libm::sin(x)).abs();
            let cos_error = (cos(x) - libm::cos(x)).abs();
            assert!(sin_error < 3e-7, "sin({x}) error: {sin_error}");
            assert!(cos_error < 2e-7, "cos({x}) error: {cos_error}");
        }
    }

    #[test]
    fn test_tan_accuracy() {
        for i in -60..=60 {
            let x = i as f64 * 0.02;
            let error = (tan(x) - libm::tan(x)).abs();
            assert!(error < 1e-8, "tan({x}) error: {error}");
        }
    }

    #[test]
    fn test_trig_symmetry() {
        let x = F64x2::new([0.3, 2.9]);
        assert_eq!(sin(-x), -sin(x));
        assert_eq!(cos(-x), cos(x));
        assert_eq!(tan(-x), -tan(x));
    }

    #[test]
    fn test_wrapped_variants() {
        let x = F32x4::new([10.0, -10.0, 100.0, 7.0]);
        let s = sin_wrapped(x);
        let c = cos_wrapped(x);
        for lane in 0..4 {
            let v = x.0[lane];
            assert!((s.0[lane] - libm::sinf(v)).abs() < 2e-5, "sin({v})");
            assert!((c.0[lane] - libm::cosf(v)).abs() < 2e-5, "cos({v})");
        }
        let t = tan_wrapped(PI + 0.5);
        assert!((t - libm::tan(0.5)).abs() < 1e-8);
    }
}
