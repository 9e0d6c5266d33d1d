//! Deferred accessor results.
//!
//! Lane reads and reductions do not pick an output shape up front: they
//! return a small `Copy` wrapper holding only the inputs, and the caller
//! materializes it with [`as_scalar`](LaneResult::as_scalar) or
//! [`as_vector`](LaneResult::as_vector). Each materialization lowers to the
//! cheapest native sequence for that shape on the active backend, so asking
//! for a broadcast never pays for a lane extraction first.

use crate::mix::Component;
use crate::simd::active;
use crate::vector4::Vector4;

/// A single lane of a vector, not yet extracted.
#[derive(Clone, Copy, Debug)]
#[must_use = "holds only its inputs; call as_scalar() or as_vector()"]
pub struct LaneResult {
    pub(crate) input: Vector4,
    pub(crate) component: Component,
}

impl LaneResult {
    /// Extracts the lane as an `f32`.
    #[inline]
    pub fn as_scalar(self) -> f32 {
        active::get_lane(self.input.0, self.component as usize)
    }

    /// Duplicates the lane across all four output lanes.
    #[inline]
    pub fn as_vector(self) -> Vector4 {
        let repr = match self.component {
            Component::X => active::dup_x(self.input.0),
            Component::Y => active::dup_y(self.input.0),
            Component::Z => active::dup_z(self.input.0),
            Component::W => active::dup_w(self.input.0),
        };
        Vector4(repr)
    }
}

/// A 4-lane dot product, not yet reduced.
#[derive(Clone, Copy, Debug)]
#[must_use = "holds only its inputs; call as_scalar() or as_vector()"]
pub struct DotResult {
    pub(crate) lhs: Vector4,
    pub(crate) rhs: Vector4,
}

impl DotResult {
    #[inline]
    pub fn as_scalar(self) -> f32 {
        active::dot4(self.lhs.0, self.rhs.0)
    }

    /// The dot product broadcast across all four lanes.
    #[inline]
    pub fn as_vector(self) -> Vector4 {
        Vector4(active::dot4_vector(self.lhs.0, self.rhs.0))
    }
}

/// A 3-lane dot product (w ignored), not yet reduced.
#[derive(Clone, Copy, Debug)]
#[must_use = "holds only its inputs; call as_scalar() or as_vector()"]
pub struct Dot3Result {
    pub(crate) lhs: Vector4,
    pub(crate) rhs: Vector4,
}

impl Dot3Result {
    #[inline]
    pub fn as_scalar(self) -> f32 {
        active::dot3(self.lhs.0, self.rhs.0)
    }

    #[inline]
    pub fn as_vector(self) -> Vector4 {
        Vector4(active::dot3_vector(self.lhs.0, self.rhs.0))
    }
}

/// The 4-lane Euclidean length, not yet materialized.
#[derive(Clone, Copy, Debug)]
#[must_use = "holds only its inputs; call as_scalar() or as_vector()"]
pub struct LengthResult {
    pub(crate) input: Vector4,
}

impl LengthResult {
    #[inline]
    pub fn as_scalar(self) -> f32 {
        active::dot4(self.input.0, self.input.0).sqrt()
    }

    #[inline]
    pub fn as_vector(self) -> Vector4 {
        Vector4(active::splat(self.as_scalar()))
    }
}

/// The 3-lane Euclidean length (w ignored), not yet materialized.
#[derive(Clone, Copy, Debug)]
#[must_use = "holds only its inputs; call as_scalar() or as_vector()"]
pub struct Length3Result {
    pub(crate) input: Vector4,
}

impl Length3Result {
    #[inline]
    pub fn as_scalar(self) -> f32 {
        active::dot3(self.input.0, self.input.0).sqrt()
    }

    #[inline]
    pub fn as_vector(self) -> Vector4 {
        Vector4(active::splat(self.as_scalar()))
    }
}

/// `1 / length`, not yet materialized.
#[derive(Clone, Copy, Debug)]
#[must_use = "holds only its inputs; call as_scalar() or as_vector()"]
pub struct LengthReciprocalResult {
    pub(crate) input: Vector4,
}

impl LengthReciprocalResult {
    #[inline]
    pub fn as_scalar(self) -> f32 {
        1.0 / active::dot4(self.input.0, self.input.0).sqrt()
    }

    #[inline]
    pub fn as_vector(self) -> Vector4 {
        Vector4(active::splat(self.as_scalar()))
    }
}

/// `1 / length3` (w ignored), not yet materialized.
#[derive(Clone, Copy, Debug)]
#[must_use = "holds only its inputs; call as_scalar() or as_vector()"]
pub struct LengthReciprocal3Result {
    pub(crate) input: Vector4,
}

impl LengthReciprocal3Result {
    #[inline]
    pub fn as_scalar(self) -> f32 {
        1.0 / active::dot3(self.input.0, self.input.0).sqrt()
    }

    #[inline]
    pub fn as_vector(self) -> Vector4 {
        Vector4(active::splat(self.as_scalar()))
    }
}
