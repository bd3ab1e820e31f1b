//! Backend consistency tests
//!
//! The approximation and native backends must agree within the kernel error
//! bounds, the runtime dispatcher must route to the backend it reports, and
//! every vector lane must equal the scalar kernel applied to that lane.

use vsl_math::dispatch::{self, Approx, BackendType, Dispatcher, MathBackend, Native};
use vsl_math::{F32x4, F64x2, Numeric};

use test_utils::*;

/// Unary kernels with the domain and absolute tolerance they are compared on.
const UNARY_CASES: &[(&str, f64, f64, f64)] = &[
    ("sin", -3.1, 3.1, 3e-7),
    ("cos", -3.1, 3.1, 2e-7),
    ("tan", -1.2, 1.2, 1e-8),
    ("asin", -1.0, 1.0, 1e-9),
    ("acos", -1.0, 1.0, 1e-9),
    ("atan", -20.0, 20.0, 1e-9),
    ("sinh", -2.0, 2.0, 1e-7),
    ("cosh", -2.0, 2.0, 1e-6),
    ("tanh", -2.0, 2.0, 1e-7),
    ("exp2", -4.0, 4.0, 1e-8),
    ("exp", -3.0, 3.0, 1e-8),
    ("log2", 0.05, 40.0, 1e-8),
    ("log", 0.05, 40.0, 1e-8),
    ("log10", 0.05, 40.0, 1e-8),
    ("sqrt", 0.05, 40.0, 1e-14),
    ("trunc", -40.0, 40.0, 0.0),
    ("floor", -40.0, 40.0, 0.0),
    ("ceil", -40.0, 40.0, 0.0),
    ("round", -40.0, 40.0, 0.0),
    ("abs", -40.0, 40.0, 0.0),
];

fn unary(dispatcher: &Dispatcher, name: &str, x: f64) -> f64 {
    match name {
        "sin" => dispatcher.sin(x),
        "cos" => dispatcher.cos(x),
        "tan" => dispatcher.tan(x),
        "asin" => dispatcher.asin(x),
        "acos" => dispatcher.acos(x),
        "atan" => dispatcher.atan(x),
        "sinh" => dispatcher.sinh(x),
        "cosh" => dispatcher.cosh(x),
        "tanh" => dispatcher.tanh(x),
        "exp2" => dispatcher.exp2(x),
        "exp" => dispatcher.exp(x),
        "log2" => dispatcher.log2(x),
        "log" => dispatcher.log(x),
        "log10" => dispatcher.log10(x),
        "sqrt" => dispatcher.sqrt(x),
        "trunc" => dispatcher.trunc(x),
        "floor" => dispatcher.floor(x),
        "ceil" => dispatcher.ceil(x),
        "round" => dispatcher.round(x),
        "abs" => dispatcher.abs(x),
        other => panic!("unknown kernel {other}"),
    }
}

#[test]
fn test_backends_agree_on_unary_kernels() {
    let approx = Dispatcher::new(BackendType::Approx);
    let native = Dispatcher::new(BackendType::Native);
    for &(name, lo, hi, tolerance) in UNARY_CASES {
        for x in linspace(lo, hi, 997) {
            let a = unary(&approx, name, x);
            let n = unary(&native, name, x);
            assert_close(a, n, tolerance, &format!("{name}({x})"));
        }
    }
}

#[test]
fn test_backends_agree_on_binary_kernels() {
    let approx = Dispatcher::for_backend::<Approx>();
    let native = Dispatcher::for_backend::<Native>();
    for x in linspace(0.5, 20.0, 200) {
        let y = 3.0 - x * 0.3;
        assert_close(approx.fmod(x, 1.7), native.fmod(x, 1.7), 1e-12, "fmod");
        assert_close(approx.atan2(y, x), native.atan2(y, x), 1e-9, "atan2");
        assert_close(approx.atan2(y, -x), native.atan2(y, -x), 1e-9, "atan2");
        assert_close(approx.log_b(3.0, x), native.log_b(3.0, x), 3e-8, "log_b");
        assert_close(approx.pow(x, 0.75), native.pow(x, 0.75), 1e-8 * native.pow(x, 0.75), "pow");
    }
}

#[test]
fn test_round_ties_agree_across_backends() {
    for x in [-2.5f64, -1.5, -0.5, 0.5, 1.5, 2.5] {
        assert_eq!(Approx::round(x), Native::round(x), "round({x})");
    }
}

#[test]
fn test_dispatcher_reports_backend() {
    let approx = Dispatcher::for_backend::<Approx>();
    assert_eq!(approx.backend(), BackendType::Approx);
    assert_eq!(approx.backend_name(), "approx");
    assert_eq!(Dispatcher::for_backend::<Native>().backend_name(), "native");
    assert_eq!(Dispatcher::default().backend(), BackendType::select());

    let x = 0.7f32;
    assert_eq!(approx.sin(x), vsl_math::sin(x));
    assert_eq!(Dispatcher::new(BackendType::Native).sin(x), libm::sinf(x));
}

#[test]
fn test_compile_time_backend_selection() {
    fn ratio<B: MathBackend>(semitones: f32) -> f32 {
        dispatch::exp2::<B, f32>(semitones / 12.0)
    }
    assert_eq!(ratio::<Approx>(12.0), 2.0);
    assert!((ratio::<Native>(12.0) - 2.0).abs() < 1e-6);
    assert_eq!(<Approx as MathBackend>::TYPE.name(), "approx");
    assert!((ratio::<Approx>(7.0) - ratio::<Native>(7.0)).abs() < 1e-6);
}

#[test]
fn test_backend_type_from_environment_style_strings() {
    for (input, expected) in [
        ("approx", Some(BackendType::Approx)),
        ("APPROX", Some(BackendType::Approx)),
        ("native\n", Some(BackendType::Native)),
        ("", None),
        ("libm", None),
    ] {
        assert_eq!(input.parse::<BackendType>().ok(), expected, "{input:?}");
    }
}

#[test]
fn test_vector_lanes_equal_scalar_kernels() {
    let x32 = F32x4::new([-2.75, -0.5, 0.3, 2.5]);
    let x64 = F64x2::new([-1.25, 0.9]);

    macro_rules! check_lanes {
        ($($name:ident),*) => {
            $(
                let v = vsl_math::$name(x32);
                for lane in 0..F32x4::LANES {
                    assert_eq!(
                        v.0[lane].to_bits(),
                        vsl_math::$name(x32.0[lane]).to_bits(),
                        "{} f32 lane {}", stringify!($name), lane
                    );
                }
                let v = vsl_math::$name(x64);
                for lane in 0..F64x2::LANES {
                    assert_eq!(
                        v.0[lane].to_bits(),
                        vsl_math::$name(x64.0[lane]).to_bits(),
                        "{} f64 lane {}", stringify!($name), lane
                    );
                }
            )*
        };
    }

    check_lanes!(
        trunc, floor, ceil, round, wrap, sin, cos, tan, sin_wrapped, cos_wrapped, tan_wrapped,
        atan, sinh, cosh, tanh, exp2, exp
    );

    let positive = vsl_math::abs(x32);
    let logs = vsl_math::log2(positive);
    for lane in 0..4 {
        assert_eq!(logs.0[lane], vsl_math::log2(positive.0[lane]));
    }
}

#[test]
fn test_native_backend_on_vectors() {
    let x = F64x2::new([0.25, 2.0]);
    let v = Native::exp(x);
    assert_eq!(v.0, [libm::exp(0.25), libm::exp(2.0)]);
    let n = Dispatcher::new(BackendType::Native).log(F32x4::splat(4.0));
    assert_eq!(n, F32x4::splat(libm::logf(4.0)));
}
