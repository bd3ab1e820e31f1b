//! Bit-level primitives
//!
//! Free-function forms of the casts and mask operations the traits expose,
//! so generic code can write `bits::select(m, a, b)` without naming the
//! trait that provides it.
//!
//! # Conversions
//!
//! | Function             | From      | To                | Semantics                      |
//! |----------------------|-----------|-------------------|--------------------------------|
//! | `reinterpret_as_int` | float     | unsigned          | same bits                      |
//! | `reinterpret_as_float` | unsigned | float            | same bits                      |
//! | `float_to_signed`    | float     | signed            | truncate toward zero, saturate |
//! | `float_to_unsigned`  | float     | unsigned          | truncate toward zero, saturate |
//! | `signed_to_float`    | signed    | float             | nearest representable          |
//! | `unsigned_to_float`  | unsigned  | float             | nearest representable          |
//! | `signed_to_unsigned` | signed    | unsigned          | same bits                      |
//! | `unsigned_to_signed` | unsigned  | signed            | same bits                      |
//!
//! Conversions never fail: NaN converts to 0 and out-of-range floats
//! saturate, the same as Rust's `as`.

use crate::traits::{Float, Mask, Numeric, SignedInt, UnsignedInt};

/// The IEEE 754 bit pattern of `x`.
///
/// # Example
///
/// ```rust
/// use vsl_math::bits::reinterpret_as_int;
///
/// assert_eq!(reinterpret_as_int(1.0f32), 0x3f80_0000);
/// ```
#[inline(always)]
pub fn reinterpret_as_int<X: Float>(x: X) -> X::Bits {
    x.to_bits()
}

/// The float whose bit pattern is `bits`.
#[inline(always)]
pub fn reinterpret_as_float<U: UnsignedInt>(bits: U) -> U::Float {
    <U::Float as Float>::from_bits(bits)
}

/// Lane-wise `x as iN`.
#[inline(always)]
pub fn float_to_signed<X: Float>(x: X) -> X::Int {
    x.to_int()
}

/// Lane-wise `x as uN`.
#[inline(always)]
pub fn float_to_unsigned<X: Float>(x: X) -> X::Bits {
    x.to_uint()
}

/// Lane-wise `x as fN`.
#[inline(always)]
pub fn signed_to_float<I: SignedInt>(x: I) -> I::Float {
    x.to_float()
}

/// Lane-wise `x as fN`.
#[inline(always)]
pub fn unsigned_to_float<U: UnsignedInt>(x: U) -> U::Float {
    x.to_float()
}

/// Lane-wise `x as uN`.
#[inline(always)]
pub fn signed_to_unsigned<I: SignedInt>(x: I) -> I::Unsigned {
    x.to_unsigned()
}

/// Lane-wise `x as iN`.
#[inline(always)]
pub fn unsigned_to_signed<U: UnsignedInt>(x: U) -> U::Signed {
    x.to_signed()
}

/// Branch-free conditional: lanes of `if_true` where `mask` is set, lanes of
/// `if_false` elsewhere.
#[inline(always)]
pub fn select<X: Numeric>(mask: X::Mask, if_true: X, if_false: X) -> X {
    X::select(mask, if_true, if_false)
}

/// Whether any lane of `mask` is set.
#[inline(always)]
pub fn any<M: Mask>(mask: M) -> bool {
    mask.any()
}

/// Whether every lane of `mask` is set.
#[inline(always)]
pub fn all<M: Mask>(mask: M) -> bool {
    mask.all()
}

/// Whether no lane of `mask` is set.
#[inline(always)]
pub fn none<M: Mask>(mask: M) -> bool {
    mask.none()
}

/// Mask of `X` with only `lane` set.
///
/// # Panics
///
/// When `lane >= X::LANES`.
#[inline(always)]
pub fn mask_for_lane<X: Numeric>(lane: usize) -> X::Mask {
    <X::Mask as Mask>::for_lane(lane)
}

/// Broadcast a boolean to every lane of a mask.
#[inline(always)]
pub fn bool_to_mask<M: Mask>(value: bool) -> M {
    M::from_bool(value)
}

/// Collapse a mask to a boolean: true when every lane is set.
#[inline(always)]
pub fn mask_to_bool<M: Mask>(mask: M) -> bool {
    mask.all()
}

/// Whether every lane of `a` equals the matching lane of `b`.
///
/// NaN lanes never compare equal.
#[inline(always)]
pub fn elements_equal<X: Numeric>(a: X, b: X) -> bool {
    a.cmp_eq(b).all()
}
