//! State-advance functions
//!
//! An [`Engine`] maps the current state word to the next one, lane-wise. The
//! state type is the unsigned counterpart of the generator's float type, so
//! one engine serves `u32`, `u64`, `U32x4` and `U64x2` alike. Widths other
//! than 32 and 64 bits are rejected at compile time.

use core::fmt::Debug;

use vsl_math::UnsignedInt;

/// A pseudo-random state transition
pub trait Engine: Copy + Default + Debug + Send + Sync + 'static {
    /// Advance `state` by one step.
    fn step<U: UnsignedInt>(state: U) -> U;
}

/// Linear congruential generator: `state · a + c`, wrapping
///
/// - 32-bit: `a = 196314165`, `c = 907633515`
/// - 64-bit: `a = 6364136223846793005`, `c = 1442695040888963407`
///
/// Fast, with weak low-order bits; the generator only reads the high bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearCongruential;

impl Engine for LinearCongruential {
    #[inline(always)]
    fn step<U: UnsignedInt>(state: U) -> U {
        const { assert!(U::BITS == 32 || U::BITS == 64, "state must be 32 or 64 bits wide") };

        let (a, c) = if U::BITS == 32 {
            (196_314_165, 907_633_515)
        } else {
            (6_364_136_223_846_793_005, 1_442_695_040_888_963_407)
        };
        state.wrapping_mul(U::splat_bits(a)).wrapping_add(U::splat_bits(c))
    }
}

/// Marsaglia xorshift
///
/// Shift triples `(13, 17, 5)` for 32-bit state and `(13, 7, 17)` for 64-bit
/// state. A zero state stays zero, so seeds must be non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xorshift;

impl Engine for Xorshift {
    #[inline(always)]
    fn step<U: UnsignedInt>(state: U) -> U {
        const { assert!(U::BITS == 32 || U::BITS == 64, "state must be 32 or 64 bits wide") };

        let (a, b, c) = if U::BITS == 32 { (13, 17, 5) } else { (13, 7, 17) };
        let mut x = state;
        x = x ^ (x << a);
        x = x ^ (x >> b);
        x ^ (x << c)
    }
}
