//! Compile-time kernel tests
//!
//! The `konst` kernels must produce the same bits as the generic kernels at
//! run time, so tables built in `const` items line up with live computation.

use proptest::prelude::*;
use vsl_math::konst::{f32 as k32, f64 as k64};

use test_utils::*;

const SEMITONES: [f32; 13] = {
    let mut table = [0.0; 13];
    let mut i = 0;
    while i < 13 {
        table[i] = k32::exp2(i as f32 / 12.0);
        i += 1;
    }
    table
};

const SINE_TABLE: [f64; 16] = {
    let mut table = [0.0; 16];
    let mut i = 0;
    while i < 16 {
        let phase = i as f64 / 16.0 * 2.0 * core::f64::consts::PI;
        table[i] = k64::sin_wrapped(phase);
        i += 1;
    }
    table
};

#[test]
fn test_const_tables_match_runtime() {
    for (i, &value) in SEMITONES.iter().enumerate() {
        assert_eq!(value.to_bits(), vsl_math::exp2(i as f32 / 12.0).to_bits(), "semitone {i}");
    }
    assert_eq!(SEMITONES[0], 1.0);
    assert_eq!(SEMITONES[12], 2.0);

    for (i, &value) in SINE_TABLE.iter().enumerate() {
        let phase = i as f64 / 16.0 * 2.0 * core::f64::consts::PI;
        assert_eq!(value.to_bits(), vsl_math::sin_wrapped(phase).to_bits(), "sine {i}");
        assert!((value - libm::sin(phase)).abs() < 1e-6);
    }
}

macro_rules! assert_same_bits {
    ($k:ident, $x:expr, $($name:ident),* $(,)?) => {
        $(
            prop_assert_eq!(
                $k::$name($x).to_bits(),
                vsl_math::$name($x).to_bits(),
                "{}({})", stringify!($name), $x
            );
        )*
    };
}

#[test]
fn test_unary_kernels_bitwise_f32() {
    proptest!(proptest_config(), |(x in -3.0f32..3.0)| {
        assert_same_bits!(
            k32, x, abs, sign, trunc, floor, ceil, round, wrap, sqrt, sin, cos, tan, sin_wrapped,
            cos_wrapped, tan_wrapped, atan, sinh, cosh, tanh, exp2, exp,
        );
        let unit = x / 3.0;
        assert_same_bits!(k32, unit, asin, acos);
        let positive = x.abs() + 0.01;
        assert_same_bits!(k32, positive, log2, log, log10);
    });
}

#[test]
fn test_unary_kernels_bitwise_f64() {
    proptest!(proptest_config(), |(x in normal_f64())| {
        assert_same_bits!(k64, x, abs, sign, trunc, floor, ceil, round, wrap, atan);
        let angle = x % 50.0;
        assert_same_bits!(k64, angle, sin_wrapped, cos_wrapped, tan_wrapped);
        let exponent = x % 200.0;
        assert_same_bits!(k64, exponent, exp2);
        let positive = x.abs() + 1e-3;
        assert_same_bits!(k64, positive, sqrt, log2, log, log10);
    });
}

#[test]
fn test_binary_kernels_bitwise() {
    proptest!(proptest_config(), |((a, b) in (normal_f64(), normal_f64()))| {
        prop_assert_eq!(k64::min(a, b), vsl_math::min(a, b));
        prop_assert_eq!(k64::max(a, b), vsl_math::max(a, b));
        prop_assert_eq!(k64::atan2(a, b).to_bits(), vsl_math::atan2(a, b).to_bits());
        prop_assume!(b != 0.0);
        prop_assert_eq!(k64::fmod(a, b).to_bits(), vsl_math::fmod(a, b).to_bits());

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assume!(lo < hi);
        let x = a * 0.5 + b * 0.25;
        prop_assert_eq!(k64::clamp(x, lo, hi), vsl_math::clamp(x, lo, hi));
        prop_assert_eq!(k64::wrap_range(x, lo, hi).to_bits(), vsl_math::wrap_range(x, lo, hi).to_bits());
    });
}

#[test]
fn test_power_kernels_bitwise() {
    proptest!(proptest_config(), |(base in 0.1f32..100.0, y in -3.0f32..3.0)| {
        prop_assert_eq!(k32::pow(base, y).to_bits(), vsl_math::pow(base, y).to_bits());
        prop_assert_eq!(k32::log_b(base + 1.0, base).to_bits(), vsl_math::log_b(base + 1.0, base).to_bits());
    });
}

#[test]
fn test_integer_conversions_match() {
    proptest!(proptest_config(), |(x in normal_f32())| {
        prop_assert_eq!(k32::trunc_to_int(x), vsl_math::trunc_to_int(x));
        prop_assert_eq!(k32::floor_to_int(x), vsl_math::floor_to_int(x));
        prop_assert_eq!(k32::ceil_to_int(x), vsl_math::ceil_to_int(x));
        prop_assert_eq!(k32::round_to_int(x), vsl_math::round_to_int(x));
    });
}
