#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! vsl-random: deterministic uniform random numbers for every vsl-math float
//!
//! [`RandomGen`] produces reproducible sequences in `[min, max)` for `f32`,
//! `f64` and the vector types, one sequence per lane. The state transition is
//! a compile-time choice of [`Engine`]: [`LinearCongruential`] (default) or
//! [`Xorshift`].
//!
//! ```rust
//! use vsl_math::{F32x4, I32x4};
//! use vsl_random::{RandomGen, Xorshift};
//!
//! let mut noise = RandomGen::<F32x4, Xorshift>::new(-1.0, 1.0);
//! let before = noise.next();
//! noise.next();
//!
//! // Restart lanes 0 and 2 only
//! noise.reset_lanes(I32x4::from_bools([true, false, true, false]));
//! let after = noise.next();
//! assert_eq!(after.0[0], before.0[0]);
//! assert_ne!(after.0[1], before.0[1]);
//! ```

pub mod engine;
pub mod generator;

pub use engine::{Engine, LinearCongruential, Xorshift};
pub use generator::{RandomGen, DEFAULT_SEED};
