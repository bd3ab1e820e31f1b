//! Accuracy tests for the approximation kernels
//!
//! Each kernel is measured against `libm` over a dense grid of its domain, in
//! both widths. Literal expectations pin a few well-known values.

use core::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};
use vsl_math::{
    acos, asin, atan, atan2, cos, cos_wrapped, cosh, exp, exp2, log, log10, log2, log_b, pow, sin,
    sin_wrapped, sinh, sqrt, tan, tan_wrapped, tanh, F32x4, F64x2,
};

use test_utils::*;

#[test]
fn test_trig_f32() {
    let xs = linspace(-PI, PI, 2000);
    assert!(max_abs_error_f32(&xs, sin, libm::sin) < 1e-6);
    assert!(max_abs_error_f32(&xs, cos, libm::cos) < 1e-6);

    let xs = linspace(-1.2, 1.2, 1000);
    let error = max_abs_error_f32(&xs, tan, libm::tan);
    assert!(error < 5e-6, "tan f32 error: {error:.2e}");
}

#[test]
fn test_trig_f64() {
    let xs = linspace(-PI, PI, 5000);
    assert!(max_abs_error(&xs, sin, libm::sin) < 3e-7);
    assert!(max_abs_error(&xs, cos, libm::cos) < 2e-7);

    let xs = linspace(-1.2, 1.2, 2000);
    assert!(max_abs_error(&xs, tan, libm::tan) < 1e-8);
}

#[test]
fn test_wrapped_trig_far_from_origin() {
    let xs = linspace(-200.0, 200.0, 4001);
    assert!(max_abs_error(&xs, sin_wrapped, libm::sin) < 1e-6);
    assert!(max_abs_error(&xs, cos_wrapped, libm::cos) < 1e-6);

    for &x in &[FRAC_PI_4, 1.0, -1.0] {
        for k in [-7.0, 3.0, 40.0] {
            let shifted = x + k * PI;
            assert_close(tan_wrapped(shifted), libm::tan(x), 1e-6, "tan_wrapped");
        }
    }
}

#[test]
fn test_inverse_trig() {
    let xs = linspace(-1.0, 1.0, 2000);
    assert!(max_abs_error(&xs, asin, libm::asin) < 1e-9);
    assert!(max_abs_error(&xs, acos, libm::acos) < 1e-9);
    assert!(max_abs_error_f32(&xs, asin, libm::asin) < 1e-6);
    assert!(max_abs_error_f32(&xs, acos, libm::acos) < 1e-6);

    let xs = linspace(-100.0, 100.0, 4000);
    assert!(max_abs_error(&xs, atan, libm::atan) < 1e-9);
    assert!(max_abs_error_f32(&xs, atan, libm::atan) < 1e-6);
}

#[test]
fn test_atan2_full_circle() {
    for i in 0..360 {
        let theta = -PI + (i as f64 + 0.5) * PI / 180.0;
        let (y, x) = (3.0 * libm::sin(theta), 3.0 * libm::cos(theta));
        assert_close(atan2(y, x), libm::atan2(y, x), 1e-9, "atan2");
    }
}

#[test]
fn test_hyperbolic() {
    let xs = linspace(-2.0, 2.0, 2000);
    assert!(max_abs_error(&xs, sinh, libm::sinh) < 1e-7);
    assert!(max_abs_error(&xs, cosh, libm::cosh) < 1e-6);
    assert!(max_abs_error(&xs, tanh, libm::tanh) < 1e-7);
    assert!(max_abs_error_f32(&xs, sinh, libm::sinh) < 2e-6);
    assert!(max_abs_error_f32(&xs, cosh, libm::cosh) < 2e-6);
    assert!(max_abs_error_f32(&xs, tanh, libm::tanh) < 2e-6);
}

#[test]
fn test_exp2_relative() {
    for x in linspace(-20.0, 20.0, 4000) {
        assert_rel_close(exp2(x), libm::exp2(x), 2e-10, "exp2 f64");
        let xf = x as f32;
        assert_rel_close(f64::from(exp2(xf)), libm::exp2(f64::from(xf)), 5e-7, "exp2 f32");
    }
}

#[test]
fn test_log2_absolute() {
    let xs = linspace(0.01, 100.0, 5000);
    assert!(max_abs_error(&xs, log2, libm::log2) < 1e-8);
    assert!(max_abs_error_f32(&xs, log2, libm::log2) < 2e-6);
}

#[test]
fn test_derived_exponentials() {
    for x in linspace(-10.0, 10.0, 400) {
        assert_rel_close(exp(x), libm::exp(x), 1e-9, "exp");
    }
    for x in linspace(0.1, 50.0, 400) {
        assert_close(log(x), libm::log(x), 1e-8, "log");
        assert_close(log10(x), libm::log10(x), 1e-8, "log10");
        assert_close(log_b(7.0, x), libm::log(x) / libm::log(7.0), 2e-8, "log_b");
        assert_rel_close(pow(x, 1.7), libm::pow(x, 1.7), 2e-8, "pow");
    }
}

#[test]
fn test_known_values() {
    assert_close(sin(FRAC_PI_2), 1.0, 3e-7, "sin(π/2)");
    assert_close(cos(PI), -1.0, 3e-7, "cos(π)");
    assert_close(tan(FRAC_PI_4), 1.0, 1e-9, "tan(π/4)");
    assert_close(atan(1.0), FRAC_PI_4, 1e-9, "atan(1)");
    assert_close(log(E), 1.0, 1e-8, "ln(e)");
    assert_close(exp(1.0), E, 1e-8, "exp(1)");
    assert_close(sqrt(2.0), core::f64::consts::SQRT_2, 1e-15, "sqrt(2)");
    assert_eq!(exp2(-3.0f32), 0.125);
    assert_eq!(log2(1024.0f32), 10.0);
}

#[test]
fn test_vector_kernels_match_libm() {
    let x = F32x4::new([-2.5, -0.3, 0.7, 3.0]);
    let s = sin(x);
    let c = cos(x);
    let e = exp2(x);
    for lane in 0..4 {
        let v = x.0[lane];
        assert!((s.0[lane] - libm::sinf(v)).abs() < 1e-6, "sin lane {lane}");
        assert!((c.0[lane] - libm::cosf(v)).abs() < 1e-6, "cos lane {lane}");
        assert!(((e.0[lane] - libm::exp2f(v)) / libm::exp2f(v)).abs() < 5e-7, "exp2 lane {lane}");
    }

    let y = F64x2::new([0.25, 40.0]);
    let l = log2(y);
    let r = sqrt(y);
    for (lane, &v) in y.0.iter().enumerate() {
        assert_close(l.0[lane], libm::log2(v), 1e-8, "log2 lane");
        assert_close(r.0[lane], libm::sqrt(v), 1e-14, "sqrt lane");
    }
}
