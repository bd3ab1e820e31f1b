#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! vsl-math: type-generic scalar and vector math
//!
//! One generic definition of each function serves the scalar floats and the
//! 128-bit lane types alike. Conditionals are branch-free `select`s, so vector
//! lanes never diverge, and every kernel also exists as a `const fn` for
//! compile-time tables.
//!
//! # Features
//!
//! - **Closed type set**: `f32`, `f64`, `i32`, `i64`, `u32`, `u64` and the
//!   vectors `F32x4`, `F64x2`, `I32x4`, `I64x2`, `U32x4`, `U64x2`, described by
//!   sealed traits with compile-time classification
//! - **Bit-level primitives**: reinterpretation, conversions, masks and
//!   tolerance-based equality
//! - **Approximation kernels**: rounding, wrapping, trigonometric, inverse
//!   trigonometric, hyperbolic, exponential and logarithmic functions
//! - **Const kernels**: the same kernels as `const fn` over `f32`/`f64` in
//!   [`konst`]
//! - **Backend dispatch**: swap the approximations for the platform math
//!   library at compile time or at run time ([`dispatch`])
//! - **Complex numbers** over every float type
//! - **No allocations**, `no_std`
//!
//! # Quick Start
//!
//! ```rust
//! use vsl_math::{exp2, select, sin_wrapped, F32x4, Numeric};
//!
//! // Equal-tempered pitch ratios for four voices at once
//! let semitones = F32x4::new([0.0, 4.0, 7.0, 12.0]);
//! let ratios = exp2(semitones / F32x4::splat(12.0));
//! assert!((ratios.0[3] - 2.0).abs() < 1e-6);
//!
//! // Lane-wise conditionals
//! let phase = F32x4::new([0.0, 10.0, -10.0, 100.0]);
//! let wave = sin_wrapped(phase);
//! let rectified = select(wave.cmp_lt(F32x4::ZERO), F32x4::ZERO, wave);
//! assert!(rectified.0.iter().all(|&v| v >= 0.0));
//!
//! // Scalars use exactly the same functions
//! assert_eq!(exp2(10.0f64), 1024.0);
//! ```

pub mod bits;
pub mod compare;
pub mod complex;
pub mod dispatch;
pub mod konst;
pub mod math;
pub mod native;
pub mod traits;
pub mod types;

pub use traits::{
    is_floating_point, is_integral, is_scalar, is_signed, is_unsigned, is_vector, Counterpart,
    CounterpartOf, Float, Integer, Mask, MaskOf, Numeric, NumericClass, ScalarOf, Signed,
    SignedInt, UnsignedCounterpart, UnsignedCounterpartOf, UnsignedInt, VectorOf,
};

pub use types::{F32x4, F64x2, I32x4, I64x2, LaneCountError, U32x4, U64x2};

pub use bits::{all, any, none, select};
pub use compare::{about_equal, abs_equal, bit_equal, rel_equal};

pub use math::{
    abs, acos, asin, atan, atan2, ceil, ceil_to_int, clamp, cos, cos_wrapped, cosh, exp, exp2,
    expand_to_float, floor, floor_to_int, fmod, log, log10, log2, log_b, max, min, pow, round,
    round_to_int, sign, sin, sin_wrapped, sinh, sqrt, tan, tan_wrapped, tanh, trunc, trunc_to_int,
    wrap, wrap_range,
};

pub use complex::Complex;
pub use dispatch::{Approx, BackendType, Dispatcher, MathBackend, Native};
pub use native::NativeMath;
