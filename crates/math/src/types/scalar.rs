//! Scalar implementations
//!
//! Scalars are single-lane instances of every trait. Their mask is `bool`
//! and `select` is an ordinary conditional.

use crate::traits::sealed::Sealed;
use crate::traits::{
    Counterpart, Float, Integer, Mask, Numeric, NumericClass, Signed, SignedInt,
    UnsignedCounterpart, UnsignedInt,
};
use crate::types::{F32x4, F64x2, I32x4, I64x2, U32x4, U64x2};

impl Sealed for bool {}

impl Mask for bool {
    const TRUE: Self = true;
    const FALSE: Self = false;
    const LANES: usize = 1;

    #[inline(always)]
    fn from_bool(value: bool) -> Self {
        value
    }

    #[inline(always)]
    fn for_lane(lane: usize) -> Self {
        assert!(lane == 0, "lane {lane} out of range for a scalar mask");
        true
    }

    #[inline(always)]
    fn test(self, lane: usize) -> bool {
        assert!(lane == 0, "lane {lane} out of range for a scalar mask");
        self
    }

    #[inline(always)]
    fn all(self) -> bool {
        self
    }

    #[inline(always)]
    fn any(self) -> bool {
        self
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

macro_rules! scalar_numeric {
    ($t:ty, $vector:ty, $class:ident, $zero:literal, $one:literal) => {
        impl Sealed for $t {}

        impl Numeric for $t {
            type Scalar = $t;
            type Vector = $vector;
            type Mask = bool;

            const CLASS: NumericClass = NumericClass::$class;
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            #[inline(always)]
            fn splat(value: Self) -> Self {
                value
            }

            #[inline(always)]
            fn as_slice(&self) -> &[Self] {
                core::slice::from_ref(self)
            }

            #[inline(always)]
            fn map(self, mut f: impl FnMut(Self) -> Self) -> Self {
                f(self)
            }

            #[inline(always)]
            fn zip_map(self, other: Self, mut f: impl FnMut(Self, Self) -> Self) -> Self {
                f(self, other)
            }

            #[inline(always)]
            fn cmp_eq(self, rhs: Self) -> bool {
                self == rhs
            }

            #[inline(always)]
            fn cmp_ne(self, rhs: Self) -> bool {
                self != rhs
            }

            #[inline(always)]
            fn cmp_lt(self, rhs: Self) -> bool {
                self < rhs
            }

            #[inline(always)]
            fn cmp_le(self, rhs: Self) -> bool {
                self <= rhs
            }

            #[inline(always)]
            fn cmp_gt(self, rhs: Self) -> bool {
                self > rhs
            }

            #[inline(always)]
            fn cmp_ge(self, rhs: Self) -> bool {
                self >= rhs
            }

            #[inline(always)]
            fn select(mask: bool, if_true: Self, if_false: Self) -> Self {
                if mask {
                    if_true
                } else {
                    if_false
                }
            }
        }
    };
}

scalar_numeric!(f32, F32x4, ScalarFloat, 0.0, 1.0);
scalar_numeric!(f64, F64x2, ScalarFloat, 0.0, 1.0);
scalar_numeric!(i32, I32x4, ScalarSigned, 0, 1);
scalar_numeric!(i64, I64x2, ScalarSigned, 0, 1);
scalar_numeric!(u32, U32x4, ScalarUnsigned, 0, 1);
scalar_numeric!(u64, U64x2, ScalarUnsigned, 0, 1);

impl Signed for f32 {
    const NEG_ONE: Self = -1.0;
}

impl Signed for f64 {
    const NEG_ONE: Self = -1.0;
}

impl Signed for i32 {
    const NEG_ONE: Self = -1;
}

impl Signed for i64 {
    const NEG_ONE: Self = -1;
}

macro_rules! scalar_integer {
    ($t:ty) => {
        impl Integer for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn count_leading_zeros(self) -> Self {
                <$t>::leading_zeros(self) as $t
            }

            #[inline(always)]
            fn splat_bits(value: u64) -> Self {
                value as $t
            }
        }
    };
}

scalar_integer!(i32);
scalar_integer!(i64);
scalar_integer!(u32);
scalar_integer!(u64);

macro_rules! scalar_family {
    ($float:ty, $int:ty, $uint:ty, $exp_bits:literal, $bias:literal, $sig_bits:literal) => {
        impl SignedInt for $int {
            type Float = $float;
            type Unsigned = $uint;

            #[inline(always)]
            fn to_float(self) -> $float {
                self as $float
            }

            #[inline(always)]
            fn to_unsigned(self) -> $uint {
                self as $uint
            }
        }

        impl UnsignedInt for $uint {
            type Float = $float;
            type Signed = $int;

            #[inline(always)]
            fn to_float(self) -> $float {
                self as $float
            }

            #[inline(always)]
            fn to_signed(self) -> $int {
                self as $int
            }
        }

        impl Float for $float {
            type Int = $int;
            type Bits = $uint;

            const EXPONENT_BITS: u32 = $exp_bits;
            const EXPONENT_BIAS: u32 = $bias;
            const SIGNIFICAND_BITS: u32 = $sig_bits;

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $float
            }

            #[inline(always)]
            fn to_int(self) -> $int {
                self as $int
            }

            #[inline(always)]
            fn to_uint(self) -> $uint {
                self as $uint
            }

            #[inline(always)]
            fn to_bits(self) -> $uint {
                <$float>::to_bits(self)
            }

            #[inline(always)]
            fn from_bits(bits: $uint) -> Self {
                <$float>::from_bits(bits)
            }
        }

        impl Counterpart for $float {
            type Counterpart = $int;
        }

        impl Counterpart for $int {
            type Counterpart = $float;
        }

        impl UnsignedCounterpart for $float {
            type UnsignedCounterpart = $uint;
        }

        impl UnsignedCounterpart for $uint {
            type UnsignedCounterpart = $float;
        }
    };
}

scalar_family!(f32, i32, u32, 8, 127, 23);
scalar_family!(f64, i64, u64, 11, 1023, 52);
