//! 128-bit lane types
//!
//! Portable fixed-size vectors: each type is a 16-byte aligned array of lanes
//! with lane-wise operators. They compile to the target's 128-bit registers
//! where the optimizer can vectorize the lane loops, and stay correct
//! everywhere else.
//!
//! Masks are the signed integer vector of the same shape ([`I32x4`] for the
//! four-lane types, [`I64x2`] for the two-lane types), one all-ones or
//! all-zeros integer per lane. `select` blends bit patterns through the
//! unsigned vector of the same shape, so no lane ever branches.
//!
//! Bit reinterpretation between shapes uses `bytemuck::cast`, which is a
//! checked, safe transmute between `Pod` types of equal size.

use core::array;
use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Shl, Shr, Sub};

use bytemuck::{cast, Pod, Zeroable};

use crate::traits::sealed::Sealed;
use crate::traits::{
    Counterpart, Float, Integer, Mask, Numeric, NumericClass, Signed, SignedInt,
    UnsignedCounterpart, UnsignedInt,
};

/// Error returned when building a vector from a slice of the wrong length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneCountError {
    /// Lanes the vector type holds
    pub expected: usize,
    /// Length of the slice provided
    pub found: usize,
}

impl fmt::Display for LaneCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a slice of {} lanes, found {}",
            self.expected, self.found
        )
    }
}

impl core::error::Error for LaneCountError {}

macro_rules! lane_type {
    (
        $(#[$meta:meta])*
        $name:ident, $scalar:ty, $lanes:literal, $class:ident, $mask:ident, $bits:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
        #[repr(C, align(16))]
        pub struct $name(pub [$scalar; $lanes]);

        impl $name {
            /// Build a vector from its lanes.
            #[inline(always)]
            pub const fn new(lanes: [$scalar; $lanes]) -> Self {
                Self(lanes)
            }

            /// Copy the lanes out.
            #[inline(always)]
            pub const fn to_array(self) -> [$scalar; $lanes] {
                self.0
            }
        }

        impl From<$scalar> for $name {
            #[inline(always)]
            fn from(value: $scalar) -> Self {
                Self([value; $lanes])
            }
        }

        impl From<[$scalar; $lanes]> for $name {
            #[inline(always)]
            fn from(lanes: [$scalar; $lanes]) -> Self {
                Self(lanes)
            }
        }

        impl From<$name> for [$scalar; $lanes] {
            #[inline(always)]
            fn from(vector: $name) -> Self {
                vector.0
            }
        }

        impl TryFrom<&[$scalar]> for $name {
            type Error = LaneCountError;

            fn try_from(slice: &[$scalar]) -> Result<Self, Self::Error> {
                let lanes = <[$scalar; $lanes]>::try_from(slice).map_err(|_| LaneCountError {
                    expected: $lanes,
                    found: slice.len(),
                })?;
                Ok(Self(lanes))
            }
        }

        impl Sealed for $name {}

        impl Numeric for $name {
            type Scalar = $scalar;
            type Vector = Self;
            type Mask = $mask;

            const CLASS: NumericClass = NumericClass::$class;
            const ZERO: Self = Self([0 as $scalar; $lanes]);
            const ONE: Self = Self([1 as $scalar; $lanes]);

            #[inline(always)]
            fn splat(value: $scalar) -> Self {
                Self([value; $lanes])
            }

            #[inline(always)]
            fn as_slice(&self) -> &[$scalar] {
                &self.0
            }

            #[inline(always)]
            fn map(self, f: impl FnMut($scalar) -> $scalar) -> Self {
                Self(self.0.map(f))
            }

            #[inline(always)]
            fn zip_map(self, other: Self, mut f: impl FnMut($scalar, $scalar) -> $scalar) -> Self {
                Self(array::from_fn(|i| f(self.0[i], other.0[i])))
            }

            #[inline(always)]
            fn cmp_eq(self, rhs: Self) -> $mask {
                $mask::from_bools(array::from_fn(|i| self.0[i] == rhs.0[i]))
            }

            #[inline(always)]
            fn cmp_ne(self, rhs: Self) -> $mask {
                $mask::from_bools(array::from_fn(|i| self.0[i] != rhs.0[i]))
            }

            #[inline(always)]
            fn cmp_lt(self, rhs: Self) -> $mask {
                $mask::from_bools(array::from_fn(|i| self.0[i] < rhs.0[i]))
            }

            #[inline(always)]
            fn cmp_le(self, rhs: Self) -> $mask {
                $mask::from_bools(array::from_fn(|i| self.0[i] <= rhs.0[i]))
            }

            #[inline(always)]
            fn cmp_gt(self, rhs: Self) -> $mask {
                $mask::from_bools(array::from_fn(|i| self.0[i] > rhs.0[i]))
            }

            #[inline(always)]
            fn cmp_ge(self, rhs: Self) -> $mask {
                $mask::from_bools(array::from_fn(|i| self.0[i] >= rhs.0[i]))
            }

            #[inline(always)]
            fn select(mask: $mask, if_true: Self, if_false: Self) -> Self {
                let m: $bits = cast(mask);
                let t: $bits = cast(if_true);
                let f: $bits = cast(if_false);
                cast((t & m) | (f & !m))
            }
        }
    };
}

macro_rules! lanewise_binary {
    ($name:ident, $($trait:ident :: $method:ident => $op:tt),* $(,)?) => {
        $(
            impl $trait for $name {
                type Output = Self;

                #[inline(always)]
                fn $method(self, rhs: Self) -> Self {
                    Self(array::from_fn(|i| self.0[i] $op rhs.0[i]))
                }
            }
        )*
    };
}

macro_rules! float_vector {
    ($name:ident, $scalar:ty, $lanes:literal, $int:ident, $iscalar:ty, $uint:ident, $uscalar:ty) => {
        lanewise_binary!($name, Add::add => +, Sub::sub => -, Mul::mul => *, Div::div => /);

        impl Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self(self.0.map(|v| -v))
            }
        }

        impl Signed for $name {
            const NEG_ONE: Self = Self([-1.0; $lanes]);
        }

        impl Float for $name {
            type Int = $int;
            type Bits = $uint;

            const EXPONENT_BITS: u32 = <$scalar as Float>::EXPONENT_BITS;
            const EXPONENT_BIAS: u32 = <$scalar as Float>::EXPONENT_BIAS;
            const SIGNIFICAND_BITS: u32 = <$scalar as Float>::SIGNIFICAND_BITS;

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                Self([value as $scalar; $lanes])
            }

            #[inline(always)]
            fn to_int(self) -> $int {
                $int(self.0.map(|v| v as $iscalar))
            }

            #[inline(always)]
            fn to_uint(self) -> $uint {
                $uint(self.0.map(|v| v as $uscalar))
            }

            #[inline(always)]
            fn to_bits(self) -> $uint {
                cast(self)
            }

            #[inline(always)]
            fn from_bits(bits: $uint) -> Self {
                cast(bits)
            }
        }

        impl Counterpart for $name {
            type Counterpart = $int;
        }

        impl Counterpart for $int {
            type Counterpart = $name;
        }

        impl UnsignedCounterpart for $name {
            type UnsignedCounterpart = $uint;
        }

        impl UnsignedCounterpart for $uint {
            type UnsignedCounterpart = $name;
        }
    };
}

macro_rules! integer_vector {
    ($name:ident, $scalar:ty, $lanes:literal) => {
        lanewise_binary!($name, BitAnd::bitand => &, BitOr::bitor => |, BitXor::bitxor => ^);

        impl Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(self.0.map(|v| !v))
            }
        }

        impl Shl<u32> for $name {
            type Output = Self;

            #[inline(always)]
            fn shl(self, rhs: u32) -> Self {
                Self(self.0.map(|v| v << rhs))
            }
        }

        impl Shr<u32> for $name {
            type Output = Self;

            #[inline(always)]
            fn shr(self, rhs: u32) -> Self {
                Self(self.0.map(|v| v >> rhs))
            }
        }

        impl Integer for $name {
            const BITS: u32 = <$scalar>::BITS;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                Self(array::from_fn(|i| self.0[i].wrapping_add(rhs.0[i])))
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                Self(array::from_fn(|i| self.0[i].wrapping_sub(rhs.0[i])))
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                Self(array::from_fn(|i| self.0[i].wrapping_mul(rhs.0[i])))
            }

            #[inline(always)]
            fn count_leading_zeros(self) -> Self {
                Self(self.0.map(|v| v.leading_zeros() as $scalar))
            }

            #[inline(always)]
            fn splat_bits(value: u64) -> Self {
                Self([value as $scalar; $lanes])
            }
        }
    };
}

macro_rules! signed_vector {
    ($name:ident, $scalar:ty, $lanes:literal, $float:ident, $fscalar:ty, $uint:ident) => {
        impl Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self(self.0.map(<$scalar>::wrapping_neg))
            }
        }

        impl Signed for $name {
            const NEG_ONE: Self = Self([-1; $lanes]);
        }

        impl SignedInt for $name {
            type Float = $float;
            type Unsigned = $uint;

            #[inline(always)]
            fn to_float(self) -> $float {
                $float(self.0.map(|v| v as $fscalar))
            }

            #[inline(always)]
            fn to_unsigned(self) -> $uint {
                cast(self)
            }
        }

        impl $name {
            /// Build a mask from per-lane booleans.
            #[inline(always)]
            pub fn from_bools(lanes: [bool; $lanes]) -> Self {
                Self(lanes.map(|b| if b { -1 } else { 0 }))
            }

            /// Read a mask back as per-lane booleans.
            #[inline(always)]
            pub fn to_bools(self) -> [bool; $lanes] {
                self.0.map(|v| v != 0)
            }
        }

        impl Mask for $name {
            const TRUE: Self = Self([-1; $lanes]);
            const FALSE: Self = Self([0; $lanes]);
            const LANES: usize = $lanes;

            #[inline(always)]
            fn from_bool(value: bool) -> Self {
                if value {
                    Self::TRUE
                } else {
                    Self::FALSE
                }
            }

            #[inline(always)]
            fn for_lane(lane: usize) -> Self {
                let mut mask = Self::FALSE;
                mask.0[lane] = -1;
                mask
            }

            #[inline(always)]
            fn test(self, lane: usize) -> bool {
                self.0[lane] != 0
            }

            #[inline(always)]
            fn all(self) -> bool {
                self.0.iter().all(|&v| v != 0)
            }

            #[inline(always)]
            fn any(self) -> bool {
                self.0.iter().any(|&v| v != 0)
            }

            #[inline(always)]
            fn and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline(always)]
            fn or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline(always)]
            fn xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline(always)]
            fn not(self) -> Self {
                !self
            }
        }
    };
}

macro_rules! unsigned_vector {
    ($name:ident, $float:ident, $fscalar:ty, $int:ident) => {
        impl UnsignedInt for $name {
            type Float = $float;
            type Signed = $int;

            #[inline(always)]
            fn to_float(self) -> $float {
                $float(self.0.map(|v| v as $fscalar))
            }

            #[inline(always)]
            fn to_signed(self) -> $int {
                cast(self)
            }
        }
    };
}

lane_type!(
    /// Four `f32` lanes
    F32x4, f32, 4, VectorFloat, I32x4, U32x4
);
lane_type!(
    /// Two `f64` lanes
    F64x2, f64, 2, VectorFloat, I64x2, U64x2
);
lane_type!(
    /// Four `i32` lanes, also the mask of every four-lane type
    I32x4, i32, 4, VectorSigned, I32x4, U32x4
);
lane_type!(
    /// Two `i64` lanes, also the mask of every two-lane type
    I64x2, i64, 2, VectorSigned, I64x2, U64x2
);
lane_type!(
    /// Four `u32` lanes
    U32x4, u32, 4, VectorUnsigned, I32x4, U32x4
);
lane_type!(
    /// Two `u64` lanes
    U64x2, u64, 2, VectorUnsigned, I64x2, U64x2
);

float_vector!(F32x4, f32, 4, I32x4, i32, U32x4, u32);
float_vector!(F64x2, f64, 2, I64x2, i64, U64x2, u64);

integer_vector!(I32x4, i32, 4);
integer_vector!(I64x2, i64, 2);
integer_vector!(U32x4, u32, 4);
integer_vector!(U64x2, u64, 2);

signed_vector!(I32x4, i32, 4, F32x4, f32, U32x4);
signed_vector!(I64x2, i64, 2, F64x2, f64, U64x2);

unsigned_vector!(U32x4, F32x4, f32, I32x4);
unsigned_vector!(U64x2, F64x2, f64, I64x2);
