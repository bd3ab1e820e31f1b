//! Uniform float generator
//!
//! # Algorithm
//!
//! Each call advances the state with the [`Engine`] and keeps the
//! `SIGNIFICAND_BITS + 1` bits just below the exponent-sized top window:
//! `(state >> EXPONENT_BITS) & (2^(SIG+1) - 1)`. That integer converts to a
//! float without rounding, so dividing by `2^(SIG+1)` gives an exactly
//! representable value in `[0, 1)`, which is then scaled to `[min, max)`.
//!
//! The scaling `(max - min) · u + min` can round up to `max` for narrow or
//! badly scaled ranges. The result is capped at the largest float below
//! `max`, so the upper bound is never produced.

use core::marker::PhantomData;

use vsl_math::{min, Float, Integer, Mask, Numeric, ScalarOf, UnsignedInt};

use crate::engine::{Engine, LinearCongruential};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 808;

/// Largest float strictly below `x`, lane-wise.
#[inline(always)]
fn next_below<X: Float>(x: X) -> X {
    let bits = x.to_bits();
    let one = <X::Bits as Integer>::splat_bits(1);
    let toward_zero = X::from_bits(bits.wrapping_sub(one));
    let away_from_zero = X::from_bits(bits.wrapping_add(one));
    let sign_bit = 1u64 << (<X::Bits as Integer>::BITS - 1);
    let smallest_negative = X::from_bits(<X::Bits as Integer>::splat_bits(sign_bit | 1));
    let non_positive = X::select(x.cmp_lt(X::ZERO), away_from_zero, smallest_negative);
    X::select(x.cmp_gt(X::ZERO), toward_zero, non_positive)
}

/// Uniform random floats in `[min, max)`
///
/// `X` is any float type of vsl-math. Vector generators run one independent
/// sequence per lane; all lanes start from `SEED`, so they stay in lockstep
/// until [`reset_lanes`](Self::reset_lanes) restarts some of them.
///
/// # Example
///
/// ```rust
/// use vsl_random::RandomGen;
///
/// let mut rng = RandomGen::<f32>::new(-1.0, 1.0);
/// for _ in 0..10 {
///     let v = rng.next();
///     assert!((-1.0..1.0).contains(&v));
/// }
///
/// // The sequence is reproducible
/// let first = RandomGen::<f32>::new(-1.0, 1.0).next();
/// rng.reset();
/// assert_eq!(rng.next(), first);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomGen<X: Float, E: Engine = LinearCongruential, const SEED: u64 = DEFAULT_SEED> {
    state: X::Bits,
    min: X,
    max: X,
    ceiling: X,
    engine: PhantomData<E>,
}

impl<X: Float, E: Engine, const SEED: u64> RandomGen<X, E, SEED> {
    /// Generator over `[min, max)`, seeded with `SEED`.
    ///
    /// # Domain
    ///
    /// `min < max`, both finite.
    pub fn new(min: ScalarOf<X>, max: ScalarOf<X>) -> Self {
        Self::with_bounds(X::splat(min), X::splat(max))
    }

    /// Generator with a separate range per lane.
    pub fn with_bounds(min: X, max: X) -> Self {
        Self {
            state: Self::seed(),
            min,
            max,
            ceiling: next_below(max),
            engine: PhantomData,
        }
    }

    #[inline(always)]
    fn seed() -> X::Bits {
        <X::Bits as Integer>::splat_bits(SEED)
    }

    /// Lower bound, inclusive.
    pub fn min(&self) -> X {
        self.min
    }

    /// Upper bound, exclusive.
    pub fn max(&self) -> X {
        self.max
    }

    /// Current state word of every lane.
    pub fn state(&self) -> X::Bits {
        self.state
    }

    /// Restart every lane from `SEED`.
    pub fn reset(&mut self) {
        self.reset_lanes(<X::Mask as Mask>::TRUE);
    }

    /// Restart the lanes selected by `mask` from `SEED`; the other lanes keep
    /// their position in the sequence.
    pub fn reset_lanes(&mut self, mask: X::Mask) {
        self.state = <X::Bits as Numeric>::select(mask, Self::seed(), self.state);
    }

    /// Next value in `[min, max)`.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) -> X {
        self.state = E::step(self.state);

        let window_bits = X::SIGNIFICAND_BITS + 1;
        let window = <X::Bits as Integer>::splat_bits((1u64 << window_bits) - 1);
        let numerator = ((self.state >> X::EXPONENT_BITS) & window).to_float();
        let unit = numerator / X::from_f64((1u64 << window_bits) as f64);

        let value = (self.max - self.min) * unit + self.min;
        min(value, self.ceiling)
    }
}

impl<X: Float, E: Engine, const SEED: u64> Default for RandomGen<X, E, SEED> {
    /// Generator over `[0, 1)`.
    fn default() -> Self {
        Self::with_bounds(X::ZERO, X::ONE)
    }
}
