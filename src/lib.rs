//! 4-lane `f32` vector math with compile-time SIMD backend selection.
//!
//! `build.rs` probes the target CPU and compiles exactly one backend: SSE
//! (x86/x86_64 with SSE4.1), NEON (aarch64), or a portable scalar fallback.
//! The public surface is identical on every backend and contains no runtime
//! feature dispatch; all three evaluate the same minimax polynomials for the
//! trigonometric operations, so results agree across targets within
//! evaluation-order noise.
//!
//! Lane reads and reductions are deferred: [`vector_get_x`] and friends
//! return a lightweight wrapper whose [`as_scalar`](LaneResult::as_scalar)
//! and [`as_vector`](LaneResult::as_vector) methods each lower to the
//! cheapest native sequence for that output shape.
//!
//! ```
//! use simd4f::*;
//!
//! let a = vector_set(1.0, 2.0, 3.0, 0.0);
//! let b = vector_broadcast(2.0);
//! let dot = vector_dot3(a, vector_mul(a, b)).as_scalar();
//! assert_eq!(dot, 28.0);
//! ```

mod accessors;
pub mod mix;
#[cfg(fallback)]
mod scalar;
mod simd;
mod vector4;

pub use accessors::{
    Dot3Result, DotResult, LaneResult, Length3Result, LengthReciprocal3Result,
    LengthReciprocalResult, LengthResult,
};
pub use mix::{Component, Mix};
pub use vector4::*;
