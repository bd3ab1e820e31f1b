//! Coefficient tables shared by the generic kernels and the const kernels
//!
//! Tables are stored as `f64` and rounded to the lane precision at the point
//! of use, so both kernel families see the same constants. Polynomials are
//! listed lowest power first.

#![allow(clippy::excessive_precision)]

/// `cos(x) ≈ C(x²)` on `[-π, π]`, max error 1.7e-7.
///
/// The constant term is pinned to 1 so `cos(0)` is exact.
pub(crate) const COS: [f64; 7] = [
    1.0,
    -4.99999934e-01,
    4.16665646e-02,
    -1.38882256e-03,
    2.47799311e-05,
    -2.71853320e-07,
    1.76564052e-09,
];

/// `sin(x) ≈ x · S(x²)` on `[-π, π]`, max error 2.5e-7.
pub(crate) const SIN: [f64; 6] = [
    9.99999737e-01,
    -1.66665387e-01,
    8.33221031e-03,
    -1.98027220e-04,
    2.69284266e-06,
    -2.00882849e-08,
];

/// Padé `[7/6]` numerator of `tan`: `x · N(x²)`.
pub(crate) const TAN_NUM: [f64; 4] = [1.0, -5.0 / 39.0, 2.0 / 715.0, -1.0 / 135135.0];

/// Padé `[7/6]` denominator of `tan`: `D(x²)`.
pub(crate) const TAN_DEN: [f64; 4] = [1.0, -6.0 / 13.0, 10.0 / 429.0, -4.0 / 19305.0];

/// Rational `[6/6]` numerator of `cosh`: `N(x²)`.
pub(crate) const COSH_NUM: [f64; 4] = [1.0, 3665.0 / 7788.0, 711.0 / 25960.0, 301.0 / 808396.0];

/// Rational `[6/6]` denominator of `cosh`: `D(x²)`.
pub(crate) const COSH_DEN: [f64; 4] = [1.0, -229.0 / 7788.0, 1.0 / 2360.0, -1.0 / 309067.0];

/// Rational `[7/6]` numerator of `sinh`: `x · N(x²)`.
pub(crate) const SINH_NUM: [f64; 4] = [
    1.0,
    29593.0 / 207636.0,
    1911.0 / 416747.0,
    13.0 / 312254.0,
];

/// Rational `[7/6]` denominator of `sinh`: `D(x²)`.
pub(crate) const SINH_DEN: [f64; 4] = [1.0, -1671.0 / 69212.0, 97.0 / 351384.0, -1.0 / 626945.0];

/// Padé `[7/6]` numerator of `tanh`: `x · N(x²)`.
pub(crate) const TANH_NUM: [f64; 4] = [1.0, 5.0 / 39.0, 2.0 / 715.0, 1.0 / 135135.0];

/// Padé `[7/6]` denominator of `tanh`: `D(x²)`.
pub(crate) const TANH_DEN: [f64; 4] = [1.0, 6.0 / 13.0, 10.0 / 429.0, 4.0 / 19305.0];

/// Rational `[7/4]` numerator of `asin` on `[-0.5, 0.5]`: `x · N(x²)`.
pub(crate) const ASIN_NUM: [f64; 4] = [
    0.9999999999430923,
    -1.0081443560556202,
    0.17419225157699703,
    0.005707027234504495,
];

/// Rational `[7/4]` denominator of `asin` on `[-0.5, 0.5]`: `D(x²)`.
///
/// Numerator and denominator together stay within 6e-11 of `asin`.
pub(crate) const ASIN_DEN: [f64; 3] = [1.0, -1.174811037346503, 0.2949947029343367];

/// Rational `[7/6]` numerator of `atan` on `[-1, 1]`: `x · N(x²)`.
pub(crate) const ATAN_NUM: [f64; 4] = [
    0.9999999991456909,
    1.1293807165311283,
    0.28636256769077256,
    0.008908636538684234,
];

/// Rational `[7/6]` denominator of `atan` on `[-1, 1]`: `D(x²)`, max error 7.1e-10.
pub(crate) const ATAN_DEN: [f64; 4] = [
    1.0,
    1.4627139309388089,
    0.5739365406637057,
    0.050512232239858214,
];

/// `2^f` on `[-0.5, 0.5]`, degree 7, max relative error 1.1e-10.
///
/// The constant term is pinned to 1 so integer powers of two are exact.
pub(crate) const EXP2: [f64; 8] = [
    1.0,
    0.6931471805459305,
    0.2402265121359518,
    0.05550410941215367,
    0.00961802560296124,
    0.0013333450560489685,
    0.00015469731976031816,
    1.5310081110468694e-05,
];

/// `log2(1 + t) ≈ t · L(t)` on `[0, 1)`, degree 10, max error 4.8e-9.
pub(crate) const LOG2: [f64; 10] = [
    1.442695034230192,
    -0.7213461353216514,
    0.4808503147957373,
    -0.3600181789236206,
    0.2838952028035346,
    -0.22090344131123446,
    0.1531313959315282,
    -0.0823261715040766,
    0.028719928380412634,
    -0.004697953924881373,
];

/// Newton iterations after the bit-level `sqrt` seed.
pub(crate) const SQRT_STEPS: usize = 4;
