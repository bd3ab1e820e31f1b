//! Trait implementations for the supported types
//!
//! - `scalar`: `f32`, `f64`, `i32`, `i64`, `u32`, `u64`
//! - `vector`: the 128-bit lane types [`F32x4`], [`F64x2`], [`I32x4`],
//!   [`I64x2`], [`U32x4`], [`U64x2`]

pub mod scalar;
pub mod vector;

pub use vector::{F32x4, F64x2, I32x4, I64x2, LaneCountError, U32x4, U64x2};
