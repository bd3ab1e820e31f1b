//! Native math backend
//!
//! [`NativeMath`] exposes the platform math library for every float type, per
//! lane for vectors. It is the reference the approximation kernels are
//! measured against and the target of the `Native` dispatch backend.
//!
//! `libm` is used instead of `std` so the crate stays `no_std`.

use crate::types::{F32x4, F64x2};
use crate::Numeric;

/// Platform math functions
///
/// Call through the trait path (`NativeMath::sin(x)`) to avoid picking up an
/// inherent `std` method of the same name on `f32`/`f64`.
pub trait NativeMath: Sized {
    /// Round toward zero.
    fn trunc(self) -> Self;
    /// Round toward negative infinity.
    fn floor(self) -> Self;
    /// Round toward positive infinity.
    fn ceil(self) -> Self;
    /// Round half away from zero, as libm does.
    ///
    /// The `Native` backend does not call this: it rounds ties toward
    /// positive infinity to match the approximation kernels.
    fn round(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Floating-point remainder of `self / y`.
    fn fmod(self, y: Self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Tangent.
    fn tan(self) -> Self;
    /// Arcsine.
    fn asin(self) -> Self;
    /// Arccosine.
    fn acos(self) -> Self;
    /// Arctangent.
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
    /// Hyperbolic sine.
    fn sinh(self) -> Self;
    /// Hyperbolic cosine.
    fn cosh(self) -> Self;
    /// Hyperbolic tangent.
    fn tanh(self) -> Self;
    /// `2^self`
    fn exp2(self) -> Self;
    /// Base-2 logarithm.
    fn log2(self) -> Self;
    /// `e^self`
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// Base-10 logarithm.
    fn log10(self) -> Self;
    /// `self^y`
    fn pow(self, y: Self) -> Self;
}

macro_rules! native_scalar {
    ($t:ty, $trunc:ident, $floor:ident, $ceil:ident, $round:ident, $abs:ident, $fmod:ident,
     $sqrt:ident, $sin:ident, $cos:ident, $tan:ident, $asin:ident, $acos:ident, $atan:ident,
     $atan2:ident, $sinh:ident, $cosh:ident, $tanh:ident, $exp2:ident, $log2:ident,
     $exp:ident, $ln:ident, $log10:ident, $pow:ident) => {
        impl NativeMath for $t {
            #[inline(always)]
            fn trunc(self) -> Self {
                libm::$trunc(self)
            }
            #[inline(always)]
            fn floor(self) -> Self {
                libm::$floor(self)
            }
            #[inline(always)]
            fn ceil(self) -> Self {
                libm::$ceil(self)
            }
            #[inline(always)]
            fn round(self) -> Self {
                libm::$round(self)
            }
            #[inline(always)]
            fn abs(self) -> Self {
                libm::$abs(self)
            }
            #[inline(always)]
            fn fmod(self, y: Self) -> Self {
                libm::$fmod(self, y)
            }
            #[inline(always)]
            fn sqrt(self) -> Self {
                libm::$sqrt(self)
            }
            #[inline(always)]
            fn sin(self) -> Self {
                libm::$sin(self)
            }
            #[inline(always)]
            fn cos(self) -> Self {
                libm::$cos(self)
            }
            #[inline(always)]
            fn tan(self) -> Self {
                libm::$tan(self)
            }
            #[inline(always)]
            fn asin(self) -> Self {
                libm::$asin(self)
            }
            #[inline(always)]
            fn acos(self) -> Self {
                libm::$acos(self)
            }
            #[inline(always)]
            fn atan(self) -> Self {
                libm::$atan(self)
            }
            #[inline(always)]
            fn atan2(self, x: Self) -> Self {
                libm::$atan2(self, x)
            }
            #[inline(always)]
            fn sinh(self) -> Self {
                libm::$sinh(self)
            }
            #[inline(always)]
            fn cosh(self) -> Self {
                libm::$cosh(self)
            }
            #[inline(always)]
            fn tanh(self) -> Self {
                libm::$tanh(self)
            }
            #[inline(always)]
            fn exp2(self) -> Self {
                libm::$exp2(self)
            }
            #[inline(always)]
            fn log2(self) -> Self {
                libm::$log2(self)
            }
            #[inline(always)]
            fn exp(self) -> Self {
                libm::$exp(self)
            }
            #[inline(always)]
            fn ln(self) -> Self {
                libm::$ln(self)
            }
            #[inline(always)]
            fn log10(self) -> Self {
                libm::$log10(self)
            }
            #[inline(always)]
            fn pow(self, y: Self) -> Self {
                libm::$pow(self, y)
            }
        }
    };
}

native_scalar!(
    f32, truncf, floorf, ceilf, roundf, fabsf, fmodf, sqrtf, sinf, cosf, tanf, asinf, acosf,
    atanf, atan2f, sinhf, coshf, tanhf, exp2f, log2f, expf, logf, log10f, powf
);

native_scalar!(
    f64, trunc, floor, ceil, round, fabs, fmod, sqrt, sin, cos, tan, asin, acos, atan, atan2,
    sinh, cosh, tanh, exp2, log2, exp, log, log10, pow
);

macro_rules! native_vector {
    ($name:ident, $scalar:ty; unary: $($unary:ident),*; binary: $($binary:ident),*) => {
        impl NativeMath for $name {
            $(
                #[inline]
                fn $unary(self) -> Self {
                    self.map(<$scalar as NativeMath>::$unary)
                }
            )*
            $(
                #[inline]
                fn $binary(self, rhs: Self) -> Self {
                    self.zip_map(rhs, <$scalar as NativeMath>::$binary)
                }
            )*
        }
    };
}

native_vector!(F32x4, f32;
    unary: trunc, floor, ceil, round, abs, sqrt, sin, cos, tan, asin, acos, atan, sinh, cosh,
        tanh, exp2, log2, exp, ln, log10;
    binary: fmod, atan2, pow);

native_vector!(F64x2, f64;
    unary: trunc, floor, ceil, round, abs, sqrt, sin, cos, tan, asin, acos, atan, sinh, cosh,
        tanh, exp2, log2, exp, ln, log10;
    binary: fmod, atan2, pow);
