//! Inverse trigonometric functions
//!
//! # Algorithm
//!
//! Both kernels evaluate an odd rational function `t · N(t²) / D(t²)` on a
//! reduced argument and undo the reduction with `select`:
//!
//! - `asin`: for `|x| > 0.5`, `asin(|x|) = π/2 - 2·asin(√((1 - |x|) / 2))`
//! - `atan`: for `|x| > 1`, `atan(|x|) = π/2 - atan(1 / |x|)`
//!
//! The sign is restored last, so both kernels are exactly odd.
//!
//! # Error Bounds (absolute)
//!
//! | Kernel | f64     | f32     |
//! |--------|---------|---------|
//! | `asin` | 1e-10   | 3e-7    |
//! | `acos` | 1e-10   | 5e-7    |
//! | `atan` | 1e-9    | 2e-7    |
//!
//! # Domain
//!
//! `asin`/`acos`: `[-1, 1]`. `atan`: every finite value, with `±∞` mapping
//! to `±π/2`.

use core::f64::consts::{FRAC_PI_2, PI};

use crate::math::coefficients::{ASIN_DEN, ASIN_NUM, ATAN_DEN, ATAN_NUM};
use crate::math::minmax::abs;
use crate::math::odd_rational;
use crate::math::sqrt::sqrt;
use crate::traits::{Float, Numeric};

#[inline(always)]
fn restore_sign<X: Float>(x: X, r: X) -> X {
    X::select(x.cmp_lt(X::ZERO), -r, r)
}

/// Arcsine, in `[-π/2, π/2]`.
#[inline(always)]
pub fn asin<X: Float>(x: X) -> X {
    let ax = abs(x);
    let outer = ax.cmp_gt(X::from_f64(0.5));
    let t = X::select(outer, sqrt((X::ONE - ax) * X::from_f64(0.5)), ax);
    let core = odd_rational(t, &ASIN_NUM, &ASIN_DEN);
    let r = X::select(outer, X::from_f64(FRAC_PI_2) - (core + core), core);
    restore_sign(x, r)
}

/// Arccosine, in `[0, π]`: `π/2 - asin(x)`.
#[inline(always)]
pub fn acos<X: Float>(x: X) -> X {
    X::from_f64(FRAC_PI_2) - asin(x)
}

/// Arctangent, in `[-π/2, π/2]`.
///
/// # Example
///
/// ```rust
/// use vsl_math::atan;
///
/// assert!((atan(1.0f64) - core::f64::consts::FRAC_PI_4).abs() < 1e-9);
/// ```
#[inline(always)]
pub fn atan<X: Float>(x: X) -> X {
    let ax = abs(x);
    let outer = ax.cmp_gt(X::ONE);
    let t = X::select(outer, X::ONE / ax, ax);
    let core = odd_rational(t, &ATAN_NUM, &ATAN_DEN);
    let r = X::select(outer, X::from_f64(FRAC_PI_2) - core, core);
    restore_sign(x, r)
}

/// Angle of the point `(x, y)`, in `[-π, π]`.
///
/// Quadrants II and III shift `atan(y / x)` by `±π`; `x == 0` gives `±π/2`,
/// or 0 at the origin.
#[inline(always)]
pub fn atan2<X: Float>(y: X, x: X) -> X {
    let pi = X::from_f64(PI);
    let half_pi = X::from_f64(FRAC_PI_2);

    let base = atan(y / x);
    let y_negative = y.cmp_lt(X::ZERO);
    let shift = X::select(y_negative, -pi, pi);
    let with_quadrant = X::select(x.cmp_lt(X::ZERO), base + shift, base);

    let on_axis = X::select(y_negative, -half_pi, half_pi);
    let x_zero_result = X::select(y.cmp_eq(X::ZERO), X::ZERO, on_axis);
    X::select(x.cmp_eq(X::ZERO), x_zero_result, with_quadrant)
}
