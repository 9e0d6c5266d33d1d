//! Backend selection.
//!
//! `build.rs` probes the compilation target and emits exactly one of the
//! `sse`, `neon`, or `fallback` cfg flags. The matching module is compiled
//! and re-exported as `active`; everything above this layer is written
//! against the `active` surface and never branches on the backend at
//! runtime.

pub(crate) mod polynomials;

#[cfg(sse)]
pub(crate) mod sse;

#[cfg(neon)]
pub(crate) mod neon;

#[cfg(fallback)]
pub(crate) mod fallback;

#[cfg(sse)]
pub(crate) use sse as active;

#[cfg(neon)]
pub(crate) use neon as active;

#[cfg(fallback)]
pub(crate) use fallback as active;
