//! Core numeric traits
//!
//! This module defines the closed set of types every vsl kernel is generic
//! over, and the type-level maps between them:
//!
//! - [`Numeric`]: all twelve supported types (six scalars, six 128-bit vectors)
//! - [`Mask`]: lane-wise boolean results of comparisons (`bool`, [`I32x4`], [`I64x2`])
//! - [`Integer`], [`SignedInt`], [`UnsignedInt`]: integer capabilities
//! - [`Float`]: floating-point capabilities and IEEE-754 layout constants
//! - [`Counterpart`], [`UnsignedCounterpart`]: the float⇄int bijections
//!
//! # Type Maps
//!
//! | Type    | Scalar | Vector  | Counterpart | Unsigned counterpart | Mask    |
//! |---------|--------|---------|-------------|----------------------|---------|
//! | `f32`   | `f32`  | `F32x4` | `i32`       | `u32`                | `bool`  |
//! | `f64`   | `f64`  | `F64x2` | `i64`       | `u64`                | `bool`  |
//! | `F32x4` | `f32`  | `F32x4` | `I32x4`     | `U32x4`              | `I32x4` |
//! | `F64x2` | `f64`  | `F64x2` | `I64x2`     | `U64x2`              | `I64x2` |
//!
//! Every map is self-inverse: the item bounds below force
//! `CounterpartOf<CounterpartOf<T>> == T` for every implementor, so the
//! compiler rejects an impl that breaks the bijection.
//!
//! # Unsupported Types
//!
//! All traits are sealed. Using any other type in a generic vsl function is a
//! compile error that names the supported set.
//!
//! [`I32x4`]: crate::I32x4
//! [`I64x2`]: crate::I64x2

use core::fmt::Debug;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Shl, Shr, Sub};

use crate::native::NativeMath;

pub(crate) mod sealed {
    pub trait Sealed {}
}

use sealed::Sealed;

/// Classification of a supported numeric type
///
/// Every supported type belongs to exactly one class. The predicates on this
/// type are the single source for the free `is_*` functions in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericClass {
    /// `i32`, `i64`
    ScalarSigned,
    /// `u32`, `u64`
    ScalarUnsigned,
    /// `f32`, `f64`
    ScalarFloat,
    /// `I32x4`, `I64x2`
    VectorSigned,
    /// `U32x4`, `U64x2`
    VectorUnsigned,
    /// `F32x4`, `F64x2`
    VectorFloat,
}

impl NumericClass {
    /// True for single-lane types.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::ScalarSigned | Self::ScalarUnsigned | Self::ScalarFloat
        )
    }

    /// True for multi-lane types.
    pub const fn is_vector(self) -> bool {
        matches!(
            self,
            Self::VectorSigned | Self::VectorUnsigned | Self::VectorFloat
        )
    }

    /// True for signed integers (floats are not counted as signed).
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::ScalarSigned | Self::VectorSigned)
    }

    /// True for unsigned integers.
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::ScalarUnsigned | Self::VectorUnsigned)
    }

    /// True for signed or unsigned integers.
    pub const fn is_integral(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    /// True for floating-point types.
    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::ScalarFloat | Self::VectorFloat)
    }
}

/// A supported scalar or vector numeric type
///
/// Comparisons return a lane mask instead of `bool` so the same generic code
/// works for one lane and for many. Combine masks with [`Mask`] and consume
/// them with [`Numeric::select`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported vsl numeric type",
    label = "unsupported numeric type",
    note = "supported scalars: f32, f64, i32, i64, u32, u64",
    note = "supported vectors: F32x4, F64x2, I32x4, I64x2, U32x4, U64x2"
)]
pub trait Numeric: Copy + Debug + Default + PartialEq + Send + Sync + 'static + Sealed {
    /// Lane element type
    type Scalar: Numeric<Scalar = Self::Scalar, Vector = Self::Vector>;

    /// 128-bit vector of `Scalar`
    type Vector: Numeric<Scalar = Self::Scalar, Vector = Self::Vector>;

    /// Result of lane-wise comparisons
    type Mask: Mask;

    /// Classification of this type
    const CLASS: NumericClass;

    /// Number of lanes (1 for scalars)
    const LANES: usize = core::mem::size_of::<Self>() / core::mem::size_of::<Self::Scalar>();

    /// Zero in every lane
    const ZERO: Self;

    /// One in every lane
    const ONE: Self;

    /// Broadcast a scalar to every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// View the lanes as a slice of length `LANES`.
    fn as_slice(&self) -> &[Self::Scalar];

    /// Read a single lane.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= LANES`.
    #[inline]
    fn extract(self, lane: usize) -> Self::Scalar {
        self.as_slice()[lane]
    }

    /// Apply `f` to every lane.
    fn map(self, f: impl FnMut(Self::Scalar) -> Self::Scalar) -> Self;

    /// Apply `f` to every pair of lanes.
    fn zip_map(
        self,
        other: Self,
        f: impl FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) -> Self;

    /// Lane-wise `==`
    fn cmp_eq(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `!=`
    fn cmp_ne(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `<`
    fn cmp_lt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `<=`
    fn cmp_le(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `>`
    fn cmp_gt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `>=`
    fn cmp_ge(self, rhs: Self) -> Self::Mask;

    /// Branchless lane-wise choice: `mask ? if_true : if_false`.
    ///
    /// Scalars use an ordinary conditional. Vectors blend bit patterns with
    /// `(t & m) | (f & !m)`, so every lane of `mask` must be all ones or all
    /// zeros.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;
}

/// Lane-wise boolean produced by comparisons
///
/// Vector masks store each lane as an integer that is all ones (true) or all
/// zeros (false), matching what SIMD compare instructions produce.
pub trait Mask: Copy + Debug + PartialEq + Send + Sync + 'static + Sealed {
    /// Every lane set
    const TRUE: Self;

    /// Every lane clear
    const FALSE: Self;

    /// Number of lanes
    const LANES: usize;

    /// Broadcast a `bool` to every lane.
    fn from_bool(value: bool) -> Self;

    /// Mask with only `lane` set.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= LANES`.
    fn for_lane(lane: usize) -> Self;

    /// Read a single lane.
    fn test(self, lane: usize) -> bool;

    /// True when every lane is set.
    fn all(self) -> bool;

    /// True when at least one lane is set.
    fn any(self) -> bool;

    /// True when no lane is set.
    #[inline]
    fn none(self) -> bool {
        !self.any()
    }

    /// Lane-wise AND
    fn and(self, rhs: Self) -> Self;

    /// Lane-wise OR
    fn or(self, rhs: Self) -> Self;

    /// Lane-wise XOR
    fn xor(self, rhs: Self) -> Self;

    /// Lane-wise NOT
    fn not(self) -> Self;
}

/// Types with a negative unit: signed integers and floats
pub trait Signed: Numeric + Neg<Output = Self> {
    /// Minus one in every lane
    const NEG_ONE: Self;
}

/// Fixed-width integer types, scalar or vector
///
/// Arithmetic is exposed only in its wrapping form so that scalar and vector
/// instantiations behave identically, including in debug builds.
pub trait Integer:
    Numeric
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of one lane in bits
    const BITS: u32;

    /// Lane-wise wrapping addition
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Lane-wise wrapping subtraction
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Lane-wise wrapping multiplication
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Lane-wise count of leading zero bits
    fn count_leading_zeros(self) -> Self;

    /// Broadcast the low `BITS` bits of `value` to every lane.
    fn splat_bits(value: u64) -> Self;
}

/// Signed integers: `i32`, `i64`, `I32x4`, `I64x2`
pub trait SignedInt: Integer + Signed {
    /// Same-width float (the counterpart)
    type Float: Float<Int = Self, Bits = Self::Unsigned>;

    /// Same-width unsigned integer
    type Unsigned: UnsignedInt<Signed = Self, Float = Self::Float, Mask = Self::Mask>;

    /// Numeric conversion to the same-width float.
    fn to_float(self) -> Self::Float;

    /// Bit-preserving conversion to the same-width unsigned integer.
    fn to_unsigned(self) -> Self::Unsigned;
}

/// Unsigned integers: `u32`, `u64`, `U32x4`, `U64x2`
pub trait UnsignedInt: Integer {
    /// Same-width float (the unsigned counterpart)
    type Float: Float<Bits = Self, Int = Self::Signed>;

    /// Same-width signed integer
    type Signed: SignedInt<Unsigned = Self, Float = Self::Float>;

    /// Numeric conversion to the same-width float.
    fn to_float(self) -> Self::Float;

    /// Bit-preserving conversion to the same-width signed integer.
    fn to_signed(self) -> Self::Signed;
}

/// IEEE-754 binary floating-point types: `f32`, `f64`, `F32x4`, `F64x2`
///
/// Vector types report the layout of their lane type.
pub trait Float:
    Signed
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + NativeMath
{
    /// Same-width signed integer (the counterpart)
    type Int: SignedInt<Float = Self, Unsigned = Self::Bits, Mask = Self::Mask>;

    /// Same-width unsigned integer holding the bit pattern
    type Bits: UnsignedInt<Float = Self, Signed = Self::Int, Mask = Self::Mask>;

    /// Width of the exponent field
    const EXPONENT_BITS: u32;

    /// Exponent bias
    const EXPONENT_BIAS: u32;

    /// Width of the stored significand (without the implicit bit)
    const SIGNIFICAND_BITS: u32;

    /// Broadcast an `f64` constant, rounding to the lane precision.
    fn from_f64(value: f64) -> Self;

    /// Numeric conversion to the signed counterpart, truncating toward zero.
    fn to_int(self) -> Self::Int;

    /// Numeric conversion to the unsigned counterpart, truncating toward zero.
    fn to_uint(self) -> Self::Bits;

    /// Reinterpret the bit pattern as an unsigned integer.
    fn to_bits(self) -> Self::Bits;

    /// Reinterpret an unsigned bit pattern as a float.
    fn from_bits(bits: Self::Bits) -> Self;
}

/// Float⇄signed-integer bijection of the same width
pub trait Counterpart: Numeric {
    /// The opposite-kind type with the same width and lane count
    type Counterpart: Counterpart<Counterpart = Self>;
}

/// Float⇄unsigned-integer bijection of the same width
pub trait UnsignedCounterpart: Numeric {
    /// The opposite-kind type with the same width and lane count
    type UnsignedCounterpart: UnsignedCounterpart<UnsignedCounterpart = Self>;
}

/// Lane element of `T`
pub type ScalarOf<T> = <T as Numeric>::Scalar;

/// 128-bit vector of `T`'s lane type
pub type VectorOf<T> = <T as Numeric>::Vector;

/// Mask produced by comparing two `T`s
pub type MaskOf<T> = <T as Numeric>::Mask;

/// Float⇄signed-integer counterpart of `T`
pub type CounterpartOf<T> = <T as Counterpart>::Counterpart;

/// Float⇄unsigned-integer counterpart of `T`
pub type UnsignedCounterpartOf<T> = <T as UnsignedCounterpart>::UnsignedCounterpart;

/// True if `T` is a single-lane type.
pub const fn is_scalar<T: Numeric>() -> bool {
    T::CLASS.is_scalar()
}

/// True if `T` is a multi-lane type.
pub const fn is_vector<T: Numeric>() -> bool {
    T::CLASS.is_vector()
}

/// True if `T` is a signed integer type.
pub const fn is_signed<T: Numeric>() -> bool {
    T::CLASS.is_signed()
}

/// True if `T` is an unsigned integer type.
pub const fn is_unsigned<T: Numeric>() -> bool {
    T::CLASS.is_unsigned()
}

/// True if `T` is an integer type.
pub const fn is_integral<T: Numeric>() -> bool {
    T::CLASS.is_integral()
}

/// True if `T` is a floating-point type.
pub const fn is_floating_point<T: Numeric>() -> bool {
    T::CLASS.is_floating_point()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{F32x4, F64x2, I32x4, I64x2, U32x4, U64x2};
    use core::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    fn classes<T: Numeric>() -> [bool; 6] {
        [
            is_scalar::<T>(),
            is_vector::<T>(),
            is_signed::<T>(),
            is_unsigned::<T>(),
            is_integral::<T>(),
            is_floating_point::<T>(),
        ]
    }

    #[test]
    fn test_classification_is_exclusive() {
        fn check<T: Numeric>() {
            let class = T::CLASS;
            assert_ne!(class.is_scalar(), class.is_vector(), "{class:?}");
            let kinds = [class.is_signed(), class.is_unsigned(), class.is_floating_point()];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{class:?}");
        }
        check::<f32>();
        check::<f64>();
        check::<i32>();
        check::<i64>();
        check::<u32>();
        check::<u64>();
        check::<F32x4>();
        check::<F64x2>();
        check::<I32x4>();
        check::<I64x2>();
        check::<U32x4>();
        check::<U64x2>();
    }

    #[test]
    fn test_classification_values() {
        assert_eq!(classes::<f32>(), [true, false, false, false, false, true]);
        assert_eq!(classes::<i64>(), [true, false, true, false, true, false]);
        assert_eq!(classes::<u32>(), [true, false, false, true, true, false]);
        assert_eq!(classes::<F64x2>(), [false, true, false, false, false, true]);
        assert_eq!(classes::<I32x4>(), [false, true, true, false, true, false]);
        assert_eq!(classes::<U64x2>(), [false, true, false, true, true, false]);
    }

    #[test]
    fn test_lane_counts() {
        assert_eq!(<f32 as Numeric>::LANES, 1);
        assert_eq!(<u64 as Numeric>::LANES, 1);
        assert_eq!(<F32x4 as Numeric>::LANES, 4);
        assert_eq!(<I32x4 as Numeric>::LANES, 4);
        assert_eq!(<F64x2 as Numeric>::LANES, 2);
        assert_eq!(<U64x2 as Numeric>::LANES, 2);
    }

    #[test]
    fn test_scalar_vector_maps() {
        assert!(same::<ScalarOf<F32x4>, f32>());
        assert!(same::<ScalarOf<f64>, f64>());
        assert!(same::<VectorOf<f32>, F32x4>());
        assert!(same::<VectorOf<u64>, U64x2>());
        assert!(same::<VectorOf<ScalarOf<I32x4>>, I32x4>());
    }

    #[test]
    fn test_counterparts_are_self_inverse() {
        fn check<T: Counterpart + UnsignedCounterpart>() {
            assert!(same::<CounterpartOf<CounterpartOf<T>>, T>());
            assert!(same::<UnsignedCounterpartOf<UnsignedCounterpartOf<T>>, T>());
        }
        check::<f32>();
        check::<f64>();
        check::<F32x4>();
        check::<F64x2>();
        assert!(same::<CounterpartOf<f32>, i32>());
        assert!(same::<CounterpartOf<F64x2>, I64x2>());
        assert!(same::<UnsignedCounterpartOf<F32x4>, U32x4>());
        assert!(same::<UnsignedCounterpartOf<u64>, f64>());
    }

    #[test]
    fn test_float_maps_agree_with_counterparts() {
        fn check<X: Float + Counterpart + UnsignedCounterpart>() {
            assert!(same::<X::Int, CounterpartOf<X>>());
            assert!(same::<X::Bits, UnsignedCounterpartOf<X>>());
        }
        check::<f32>();
        check::<f64>();
        check::<F32x4>();
        check::<F64x2>();
    }

    #[test]
    fn test_ieee_layout_constants() {
        assert_eq!(
            (f32::EXPONENT_BITS, f32::EXPONENT_BIAS, f32::SIGNIFICAND_BITS),
            (8, 127, 23)
        );
        assert_eq!(
            (f64::EXPONENT_BITS, f64::EXPONENT_BIAS, f64::SIGNIFICAND_BITS),
            (11, 1023, 52)
        );
        assert_eq!(F32x4::SIGNIFICAND_BITS, f32::SIGNIFICAND_BITS);
        assert_eq!(F64x2::EXPONENT_BIAS, f64::EXPONENT_BIAS);
        assert_eq!(1 + f32::EXPONENT_BITS + f32::SIGNIFICAND_BITS, 32);
        assert_eq!(1 + f64::EXPONENT_BITS + f64::SIGNIFICAND_BITS, 64);
    }

    #[test]
    fn test_predicates_in_const_context() {
        const VECTOR_FLOAT: bool = is_vector::<F32x4>() && is_floating_point::<F32x4>();
        const SCALAR_UNSIGNED: bool = is_scalar::<u32>() && is_unsigned::<u32>();
        assert!(VECTOR_FLOAT);
        assert!(SCALAR_UNSIGNED);
    }
}
