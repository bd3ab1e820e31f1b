//! Backend dispatch
//!
//! Every kernel exists twice: as an approximation from [`math`](crate::math)
//! and as the platform math library through [`NativeMath`]. This module lets
//! callers pick one without changing the call site.
//!
//! # Compile-time selection
//!
//! The [`MathBackend`] trait is implemented by the zero-sized [`Approx`] and
//! [`Native`] types. Generic code takes the backend as a type parameter and
//! the choice costs nothing at run time:
//!
//! ```rust
//! use vsl_math::dispatch::{self, Approx, Native};
//!
//! let fast = dispatch::exp2::<Approx, _>(0.5f32);
//! let exact = dispatch::exp2::<Native, _>(0.5f32);
//! assert!((fast - exact).abs() < 1e-6);
//! ```
//!
//! # Runtime selection
//!
//! [`Dispatcher`] holds a [`BackendType`] and branches on it per call. Its
//! default honours the `force-approx` cargo feature.
//!
//! ```rust
//! use vsl_math::dispatch::{BackendType, Dispatcher};
//!
//! let dispatcher = Dispatcher::new("approx".parse::<BackendType>()?);
//! assert_eq!(dispatcher.backend_name(), "approx");
//! assert!((dispatcher.sin(0.5f64) - 0.479425538604203).abs() < 1e-6);
//! # Ok::<(), vsl_math::dispatch::ParseBackendError>(())
//! ```
//!
//! # Semantics
//!
//! Both backends round ties toward positive infinity, so `round` agrees
//! exactly. The approximate `sin`, `cos` and `tan` expect arguments in their
//! fitted domains (see [`math::trig`](crate::math::trig)); the native ones
//! accept any finite value.

use core::fmt;
use core::str::FromStr;

use crate::math;
use crate::native::NativeMath;
use crate::traits::Float;

/// Backend Type Enumeration
///
/// Names the implementation behind a [`Dispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendType {
    /// Approximation kernels from [`math`](crate::math)
    Approx,

    /// Platform math library, per lane
    Native,
}

impl BackendType {
    /// Backend used when the caller expresses no preference.
    ///
    /// `Native`, unless the `force-approx` feature is enabled.
    pub const fn select() -> Self {
        if cfg!(feature = "force-approx") {
            BackendType::Approx
        } else {
            BackendType::Native
        }
    }

    /// Lowercase backend name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            BackendType::Approx => "approx",
            BackendType::Native => "native",
        }
    }
}

impl Default for BackendType {
    fn default() -> Self {
        Self::select()
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown backend name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseBackendError;

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown math backend (expected \"approx\" or \"native\")")
    }
}

impl core::error::Error for ParseBackendError {}

impl FromStr for BackendType {
    type Err = ParseBackendError;

    /// Parse a backend name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("approx") {
            Ok(BackendType::Approx)
        } else if s.eq_ignore_ascii_case("native") {
            Ok(BackendType::Native)
        } else {
            Err(ParseBackendError)
        }
    }
}

/// A complete set of kernels
///
/// Implementations must agree with each other within the error bounds of the
/// approximation kernels on their documented domains.
pub trait MathBackend: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The runtime name of this backend
    const TYPE: BackendType;

    /// Round toward zero.
    fn trunc<X: Float>(x: X) -> X;
    /// Round toward negative infinity.
    fn floor<X: Float>(x: X) -> X;
    /// Round toward positive infinity.
    fn ceil<X: Float>(x: X) -> X;
    /// Round to nearest, ties toward positive infinity.
    fn round<X: Float>(x: X) -> X;
    /// Absolute value.
    fn abs<X: Float>(x: X) -> X;
    /// Remainder of `x / y` with the sign of `x`.
    fn fmod<X: Float>(x: X, y: X) -> X;
    /// Square root.
    fn sqrt<X: Float>(x: X) -> X;
    /// Sine.
    fn sin<X: Float>(x: X) -> X;
    /// Cosine.
    fn cos<X: Float>(x: X) -> X;
    /// Tangent.
    fn tan<X: Float>(x: X) -> X;
    /// Arcsine.
    fn asin<X: Float>(x: X) -> X;
    /// Arccosine.
    fn acos<X: Float>(x: X) -> X;
    /// Arctangent.
    fn atan<X: Float>(x: X) -> X;
    /// Angle of the point `(x, y)`.
    fn atan2<X: Float>(y: X, x: X) -> X;
    /// Hyperbolic sine.
    fn sinh<X: Float>(x: X) -> X;
    /// Hyperbolic cosine.
    fn cosh<X: Float>(x: X) -> X;
    /// Hyperbolic tangent.
    fn tanh<X: Float>(x: X) -> X;
    /// `2^x`.
    fn exp2<X: Float>(x: X) -> X;
    /// Base-2 logarithm.
    fn log2<X: Float>(x: X) -> X;
    /// `e^x`.
    fn exp<X: Float>(x: X) -> X;
    /// Natural logarithm.
    fn log<X: Float>(x: X) -> X;
    /// Base-10 logarithm.
    fn log10<X: Float>(x: X) -> X;
    /// Logarithm of `x` in base `base`.
    fn log_b<X: Float>(base: X, x: X) -> X;
    /// `x^y`.
    fn pow<X: Float>(x: X, y: X) -> X;
}

/// Approximation kernels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Approx;

/// Platform math library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Native;

macro_rules! forward {
    ($($name:ident => $target:path),* $(,)?) => {
        $(
            #[inline(always)]
            fn $name<X: Float>(x: X) -> X {
                $target(x)
            }
        )*
    };
}

impl MathBackend for Approx {
    const TYPE: BackendType = BackendType::Approx;

    forward!(
        trunc => math::trunc,
        floor => math::floor,
        ceil => math::ceil,
        round => math::round,
        abs => math::abs,
        sqrt => math::sqrt,
        sin => math::sin,
        cos => math::cos,
        tan => math::tan,
        asin => math::asin,
        acos => math::acos,
        atan => math::atan,
        sinh => math::sinh,
        cosh => math::cosh,
        tanh => math::tanh,
        exp2 => math::exp2,
        log2 => math::log2,
        exp => math::exp,
        log => math::log,
        log10 => math::log10,
    );

    #[inline(always)]
    fn fmod<X: Float>(x: X, y: X) -> X {
        math::fmod(x, y)
    }

    #[inline(always)]
    fn atan2<X: Float>(y: X, x: X) -> X {
        math::atan2(y, x)
    }

    #[inline(always)]
    fn log_b<X: Float>(base: X, x: X) -> X {
        math::log_b(base, x)
    }

    #[inline(always)]
    fn pow<X: Float>(x: X, y: X) -> X {
        math::pow(x, y)
    }
}

impl MathBackend for Native {
    const TYPE: BackendType = BackendType::Native;

    forward!(
        trunc => NativeMath::trunc,
        floor => NativeMath::floor,
        ceil => NativeMath::ceil,
        abs => NativeMath::abs,
        sqrt => NativeMath::sqrt,
        sin => NativeMath::sin,
        cos => NativeMath::cos,
        tan => NativeMath::tan,
        asin => NativeMath::asin,
        acos => NativeMath::acos,
        atan => NativeMath::atan,
        sinh => NativeMath::sinh,
        cosh => NativeMath::cosh,
        tanh => NativeMath::tanh,
        exp2 => NativeMath::exp2,
        log2 => NativeMath::log2,
        exp => NativeMath::exp,
        log => NativeMath::ln,
        log10 => NativeMath::log10,
    );

    // libm rounds ties away from zero.
    #[inline(always)]
    fn round<X: Float>(x: X) -> X {
        NativeMath::floor(x + X::from_f64(0.5))
    }

    #[inline(always)]
    fn fmod<X: Float>(x: X, y: X) -> X {
        NativeMath::fmod(x, y)
    }

    #[inline(always)]
    fn atan2<X: Float>(y: X, x: X) -> X {
        NativeMath::atan2(y, x)
    }

    #[inline(always)]
    fn log_b<X: Float>(base: X, x: X) -> X {
        NativeMath::log2(x) / NativeMath::log2(base)
    }

    #[inline(always)]
    fn pow<X: Float>(x: X, y: X) -> X {
        NativeMath::pow(x, y)
    }
}

macro_rules! dispatch_fns {
    (unary: $($name:ident),*; binary: $($bname:ident($a:ident, $b:ident)),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($name), "` through the backend `B`.")]
            #[inline(always)]
            pub fn $name<B: MathBackend, X: Float>(x: X) -> X {
                B::$name(x)
            }
        )*
        $(
            #[doc = concat!("`", stringify!($bname), "` through the backend `B`.")]
            #[inline(always)]
            pub fn $bname<B: MathBackend, X: Float>($a: X, $b: X) -> X {
                B::$bname($a, $b)
            }
        )*

        impl Dispatcher {
            $(
                #[doc = concat!("`", stringify!($name), "` through the selected backend.")]
                #[inline]
                pub fn $name<X: Float>(&self, x: X) -> X {
                    match self.backend {
                        BackendType::Approx => Approx::$name(x),
                        BackendType::Native => Native::$name(x),
                    }
                }
            )*
            $(
                #[doc = concat!("`", stringify!($bname), "` through the selected backend.")]
                #[inline]
                pub fn $bname<X: Float>(&self, $a: X, $b: X) -> X {
                    match self.backend {
                        BackendType::Approx => Approx::$bname($a, $b),
                        BackendType::Native => Native::$bname($a, $b),
                    }
                }
            )*
        }
    };
}

/// Runtime Backend Dispatcher
///
/// Selects a backend once and forwards every kernel call to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatcher {
    backend: BackendType,
}

impl Dispatcher {
    /// Dispatcher for `backend`.
    pub fn new(backend: BackendType) -> Self {
        ::log::debug!("math backend selected: {}", backend);
        Self { backend }
    }

    /// Dispatcher for the backend `B`.
    pub fn for_backend<B: MathBackend>() -> Self {
        Self::new(B::TYPE)
    }

    /// The selected backend.
    pub fn backend(&self) -> BackendType {
        self.backend
    }

    /// Name of the selected backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(BackendType::default())
    }
}

dispatch_fns!(
    unary: trunc, floor, ceil, round, abs, sqrt, sin, cos, tan, asin, acos, atan, sinh, cosh,
        tanh, exp2, log2, exp, log, log10;
    binary: fmod(x, y), atan2(y, x), log_b(base, x), pow(x, y),
);
