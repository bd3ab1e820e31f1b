//! `const fn` kernels for compile-time evaluation
//!
//! Trait methods cannot be called from `const fn` on stable Rust, so the
//! generic kernels in [`math`](crate::math) are not usable in `const` items.
//! This module provides the same kernels as plain `const fn`s over `f32` and
//! `f64`. They read the same coefficient tables and perform the same
//! operations in the same order, so a `konst` result is bit-identical to the
//! generic kernel evaluated at run time.
//!
//! Conditionals that the generic kernels express with `select` are ordinary
//! `if` expressions here. Both branches of a `select` are computed eagerly,
//! but the kernels have no side effects, so the result is the same.
//!
//! # Example
//!
//! ```rust
//! use vsl_math::konst;
//!
//! const TABLE_STEP: f32 = konst::f32::exp2(1.0 / 12.0);
//! const HALF_TURN: f64 = konst::f64::wrap_range(3.0 * core::f64::consts::PI, 0.0, 2.0);
//!
//! assert_eq!(TABLE_STEP, vsl_math::exp2(1.0f32 / 12.0));
//! assert!(HALF_TURN >= 0.0 && HALF_TURN < 2.0);
//! ```

macro_rules! const_kernels {
    ($float:ident, $int:ident, $uint:ident, $bias:literal, $sig_bits:literal) => {
        use core::f64::consts::{FRAC_PI_2, LN_2, LOG10_2, LOG2_E, PI};

        use crate::math::coefficients::{
            ASIN_DEN, ASIN_NUM, ATAN_DEN, ATAN_NUM, COS, COSH_DEN, COSH_NUM, EXP2, LOG2, SIN,
            SINH_DEN, SINH_NUM, SQRT_STEPS, TANH_DEN, TANH_NUM, TAN_DEN, TAN_NUM,
        };

        const EXPONENT_BIAS: $uint = $bias;
        const SIGNIFICAND_BITS: u32 = $sig_bits;
        const SIGNIFICAND_MASK: $uint = (1 << SIGNIFICAND_BITS) - 1;
        const INTEGER_LIMIT: $float = (1u64 << SIGNIFICAND_BITS) as $float;

        const fn horner(x: $float, coefficients: &[f64]) -> $float {
            let mut i = coefficients.len();
            if i == 0 {
                return 0.0;
            }
            i -= 1;
            let mut acc = coefficients[i] as $float;
            while i > 0 {
                i -= 1;
                acc = acc * x + coefficients[i] as $float;
            }
            acc
        }

        const fn odd_rational(x: $float, numerator: &[f64], denominator: &[f64]) -> $float {
            let x2 = x * x;
            x * horner(x2, numerator) / horner(x2, denominator)
        }

        /// Absolute value.
        pub const fn abs(x: $float) -> $float {
            if x >= 0.0 {
                x
            } else {
                -x
            }
        }

        /// Minimum, `b` when unordered.
        pub const fn min(a: $float, b: $float) -> $float {
            if a < b {
                a
            } else {
                b
            }
        }

        /// Maximum, `b` when unordered.
        pub const fn max(a: $float, b: $float) -> $float {
            if a > b {
                a
            } else {
                b
            }
        }

        /// Restrict `x` to `[lo, hi]`.
        pub const fn clamp(x: $float, lo: $float, hi: $float) -> $float {
            min(max(x, lo), hi)
        }

        /// `1`, `-1` or `0`.
        pub const fn sign(x: $float) -> $float {
            if x > 0.0 {
                1.0
            } else if x < 0.0 {
                -1.0
            } else {
                0.0
            }
        }

        /// Round toward zero.
        pub const fn trunc(x: $float) -> $float {
            let integral = (x as $int) as $float;
            if abs(x) < INTEGER_LIMIT {
                integral
            } else {
                x
            }
        }

        /// Round toward negative infinity.
        pub const fn floor(x: $float) -> $float {
            let t = trunc(x);
            if x >= 0.0 {
                t
            } else if x == t {
                t
            } else {
                t - 1.0
            }
        }

        /// Round toward positive infinity.
        pub const fn ceil(x: $float) -> $float {
            let f = floor(x);
            if x == f {
                f
            } else {
                f + 1.0
            }
        }

        /// Round to nearest, ties toward positive infinity.
        pub const fn round(x: $float) -> $float {
            floor(x + 0.5)
        }

        /// Truncate to the same-width signed integer.
        pub const fn trunc_to_int(x: $float) -> $int {
            x as $int
        }

        /// [`floor`] as the same-width signed integer.
        pub const fn floor_to_int(x: $float) -> $int {
            floor(x) as $int
        }

        /// [`ceil`] as the same-width signed integer.
        pub const fn ceil_to_int(x: $float) -> $int {
            ceil(x) as $int
        }

        /// [`round`] as the same-width signed integer.
        pub const fn round_to_int(x: $float) -> $int {
            round(x) as $int
        }

        /// Remainder with the sign of `x`.
        pub const fn fmod(x: $float, y: $float) -> $float {
            x - trunc(x / y) * y
        }

        /// Fractional part in `[0, 1)`.
        pub const fn wrap(x: $float) -> $float {
            let frac = x - floor(x);
            if frac >= 1.0 {
                0.0
            } else {
                frac
            }
        }

        /// Wrap `x` into `[a, b)`.
        pub const fn wrap_range(x: $float, a: $float, b: $float) -> $float {
            let range = b - a;
            let v = range * wrap((x - a) / range) + a;
            if v >= b {
                a
            } else {
                v
            }
        }

        /// Square root.
        pub const fn sqrt(x: $float) -> $float {
            let magic: $uint = EXPONENT_BIAS << (SIGNIFICAND_BITS - 1);
            let mut r = <$float>::from_bits((x.to_bits() >> 1).wrapping_add(magic));
            let mut step = 0;
            while step < SQRT_STEPS {
                r = 0.5 * (r + x / r);
                step += 1;
            }
            if x == 0.0 || x == <$float>::INFINITY {
                x
            } else {
                r
            }
        }

        /// Sine on `[-π, π]`.
        pub const fn sin(x: $float) -> $float {
            x * horner(x * x, &SIN)
        }

        /// Cosine on `[-π, π]`.
        pub const fn cos(x: $float) -> $float {
            horner(x * x, &COS)
        }

        /// Tangent on `[-π/2, π/2]`.
        pub const fn tan(x: $float) -> $float {
            odd_rational(x, &TAN_NUM, &TAN_DEN)
        }

        /// Sine of any finite `x`.
        pub const fn sin_wrapped(x: $float) -> $float {
            sin(wrap_range(x, -PI as $float, PI as $float))
        }

        /// Cosine of any finite `x`.
        pub const fn cos_wrapped(x: $float) -> $float {
            cos(wrap_range(x, -PI as $float, PI as $float))
        }

        /// Tangent of any finite `x`.
        pub const fn tan_wrapped(x: $float) -> $float {
            tan(wrap_range(x, -FRAC_PI_2 as $float, FRAC_PI_2 as $float))
        }

        const fn restore_sign(x: $float, r: $float) -> $float {
            if x < 0.0 {
                -r
            } else {
                r
            }
        }

        /// Arcsine on `[-1, 1]`.
        pub const fn asin(x: $float) -> $float {
            let ax = abs(x);
            let outer = ax > 0.5;
            let t = if outer { sqrt((1.0 - ax) * 0.5) } else { ax };
            let core = odd_rational(t, &ASIN_NUM, &ASIN_DEN);
            let r = if outer { FRAC_PI_2 as $float - (core + core) } else { core };
            restore_sign(x, r)
        }

        /// Arccosine on `[-1, 1]`.
        pub const fn acos(x: $float) -> $float {
            FRAC_PI_2 as $float - asin(x)
        }

        /// Arctangent.
        pub const fn atan(x: $float) -> $float {
            let ax = abs(x);
            let outer = ax > 1.0;
            let t = if outer { 1.0 / ax } else { ax };
            let core = odd_rational(t, &ATAN_NUM, &ATAN_DEN);
            let r = if outer { FRAC_PI_2 as $float - core } else { core };
            restore_sign(x, r)
        }

        /// Angle of the point `(x, y)`, in `[-π, π]`.
        pub const fn atan2(y: $float, x: $float) -> $float {
            let pi = PI as $float;
            let half_pi = FRAC_PI_2 as $float;
            if x == 0.0 {
                if y == 0.0 {
                    0.0
                } else if y < 0.0 {
                    -half_pi
                } else {
                    half_pi
                }
            } else {
                let base = atan(y / x);
                if x < 0.0 {
                    base + if y < 0.0 { -pi } else { pi }
                } else {
                    base
                }
            }
        }

        /// Hyperbolic sine.
        pub const fn sinh(x: $float) -> $float {
            odd_rational(x, &SINH_NUM, &SINH_DEN)
        }

        /// Hyperbolic cosine.
        pub const fn cosh(x: $float) -> $float {
            let x2 = x * x;
            horner(x2, &COSH_NUM) / horner(x2, &COSH_DEN)
        }

        /// Hyperbolic tangent.
        pub const fn tanh(x: $float) -> $float {
            odd_rational(x, &TANH_NUM, &TANH_DEN)
        }

        /// `2^x`.
        pub const fn exp2(x: $float) -> $float {
            let n = round(x);
            let f = x - n;
            let biased = (n as $int).wrapping_add(EXPONENT_BIAS as $int);
            let scale = <$float>::from_bits((biased << SIGNIFICAND_BITS) as $uint);
            scale * horner(f, &EXP2)
        }

        /// `log2(x)` for positive normal `x`.
        pub const fn log2(x: $float) -> $float {
            let bits = x.to_bits();
            let exponent = (bits >> SIGNIFICAND_BITS) as $float - EXPONENT_BIAS as f64 as $float;
            let m = <$float>::from_bits((bits & SIGNIFICAND_MASK) | (EXPONENT_BIAS << SIGNIFICAND_BITS));
            let t = m - 1.0;
            exponent + t * horner(t, &LOG2)
        }

        /// `e^x`.
        pub const fn exp(x: $float) -> $float {
            exp2(LOG2_E as $float * x)
        }

        /// Natural logarithm.
        pub const fn log(x: $float) -> $float {
            LN_2 as $float * log2(x)
        }

        /// Base-10 logarithm.
        pub const fn log10(x: $float) -> $float {
            LOG10_2 as $float * log2(x)
        }

        /// Logarithm of `x` in base `base`.
        pub const fn log_b(base: $float, x: $float) -> $float {
            log2(x) / log2(base)
        }

        /// `x^y` for positive `x`.
        pub const fn pow(x: $float, y: $float) -> $float {
            exp2(log2(x) * y)
        }

        const _: () = assert!(round(-1.5) == -1.0);
        const _: () = assert!(floor(-0.5) == -1.0);
        const _: () = assert!(trunc_to_int(-2.9) == -2);
        const _: () = assert!(exp2(3.0) == 8.0);
        const _: () = assert!(log2(8.0) == 3.0);
        const _: () = assert!(cos(0.0) == 1.0);
        const _: () = assert!(sqrt(4.0) == 2.0);
    };
}

/// Compile-time kernels for `f32`.
pub mod f32 {
    const_kernels!(f32, i32, u32, 127, 23);
}

/// Compile-time kernels for `f64`.
pub mod f64 {
    const_kernels!(f64, i64, u64, 1023, 52);
}
