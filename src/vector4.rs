//! The `Vector4` value type and its operation set.
//!
//! Every function here is a thin shim over the active backend: it unwraps
//! the opaque representations, calls the backend kernel, and rewraps. The
//! backend is fixed at compile time by `build.rs`, so none of these
//! functions branch on CPU features.

use crate::accessors::{
    Dot3Result, DotResult, LaneResult, Length3Result, LengthReciprocal3Result,
    LengthReciprocalResult, LengthResult,
};
use crate::mix::{is_first_input, selector_lane, Component};
use crate::simd::active;

/// Default tolerance for the `near_equal` comparison family.
pub const DEFAULT_NEAR_EQUAL_THRESHOLD: f32 = 0.00001;

/// Four `f32` lanes named x, y, z, w, held in the active backend's native
/// register type.
#[derive(Clone, Copy)]
pub struct Vector4(pub(crate) active::Repr);

/// A per-lane comparison result. Each lane is all-ones (true) or zero.
#[derive(Clone, Copy)]
pub struct Mask4(pub(crate) active::MaskRepr);

impl core::fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut lanes = [0.0_f32; 4];
        active::store(self.0, &mut lanes);
        f.debug_tuple("Vector4")
            .field(&lanes[0])
            .field(&lanes[1])
            .field(&lanes[2])
            .field(&lanes[3])
            .finish()
    }
}

impl PartialEq for Vector4 {
    /// Lane-wise IEEE equality over all four lanes. A NaN lane makes two
    /// vectors unequal, including to themselves.
    fn eq(&self, other: &Self) -> bool {
        active::mask_all_true(active::cmp_eq(self.0, other.0), 4)
    }
}

// ---------------------------------------------------------------------------
// Construction, loads, and stores
// ---------------------------------------------------------------------------

/// Builds a vector from four lane values.
#[inline]
pub fn vector_set(x: f32, y: f32, z: f32, w: f32) -> Vector4 {
    Vector4(active::new(x, y, z, w))
}

/// All four lanes zero.
#[inline]
pub fn vector_zero() -> Vector4 {
    Vector4(active::zero())
}

/// Duplicates `value` across all four lanes.
#[inline]
pub fn vector_broadcast(value: f32) -> Vector4 {
    Vector4(active::splat(value))
}

/// Loads four lanes. No alignment requirement.
#[inline]
pub fn vector_load(input: &[f32; 4]) -> Vector4 {
    Vector4(active::load(input))
}

/// Loads x, y, z and sets w to zero.
#[inline]
pub fn vector_load3(input: &[f32; 3]) -> Vector4 {
    Vector4(active::new(input[0], input[1], input[2], 0.0))
}

/// Loads x, y and sets z and w to zero.
#[inline]
pub fn vector_load2(input: &[f32; 2]) -> Vector4 {
    Vector4(active::new(input[0], input[1], 0.0, 0.0))
}

/// Loads x and sets y, z, w to zero.
#[inline]
pub fn vector_load1(input: &f32) -> Vector4 {
    Vector4(active::new(*input, 0.0, 0.0, 0.0))
}

/// Stores all four lanes. No alignment requirement.
#[inline]
pub fn vector_store(input: Vector4, output: &mut [f32; 4]) {
    active::store(input.0, output);
}

/// Stores x, y, z only.
#[inline]
pub fn vector_store3(input: Vector4, output: &mut [f32; 3]) {
    output[0] = active::get_lane(input.0, 0);
    output[1] = active::get_lane(input.0, 1);
    output[2] = active::get_lane(input.0, 2);
}

/// Stores x, y only.
#[inline]
pub fn vector_store2(input: Vector4, output: &mut [f32; 2]) {
    output[0] = active::get_lane(input.0, 0);
    output[1] = active::get_lane(input.0, 1);
}

/// Stores x only.
#[inline]
pub fn vector_store1(input: Vector4, output: &mut f32) {
    *output = active::get_lane(input.0, 0);
}

// ---------------------------------------------------------------------------
// Lane accessors
// ---------------------------------------------------------------------------

/// The x lane, materialized on demand.
#[inline]
pub fn vector_get_x(input: Vector4) -> LaneResult {
    vector_get_component(input, Component::X)
}

/// The y lane, materialized on demand.
#[inline]
pub fn vector_get_y(input: Vector4) -> LaneResult {
    vector_get_component(input, Component::Y)
}

/// The z lane, materialized on demand.
#[inline]
pub fn vector_get_z(input: Vector4) -> LaneResult {
    vector_get_component(input, Component::Z)
}

/// The w lane, materialized on demand.
#[inline]
pub fn vector_get_w(input: Vector4) -> LaneResult {
    vector_get_component(input, Component::W)
}

/// The lane named by `component`, materialized on demand.
#[inline]
pub fn vector_get_component(input: Vector4, component: Component) -> LaneResult {
    LaneResult { input, component }
}

/// Returns `input` with the x lane replaced. The other lanes keep their
/// exact bit patterns.
#[inline]
pub fn vector_set_x(input: Vector4, value: f32) -> Vector4 {
    Vector4(active::set_x(input.0, value))
}

/// Returns `input` with the y lane replaced.
#[inline]
pub fn vector_set_y(input: Vector4, value: f32) -> Vector4 {
    Vector4(active::set_y(input.0, value))
}

/// Returns `input` with the z lane replaced.
#[inline]
pub fn vector_set_z(input: Vector4, value: f32) -> Vector4 {
    Vector4(active::set_z(input.0, value))
}

/// Returns `input` with the w lane replaced.
#[inline]
pub fn vector_set_w(input: Vector4, value: f32) -> Vector4 {
    Vector4(active::set_w(input.0, value))
}

// ---------------------------------------------------------------------------
// Reductions, materialized on demand
// ---------------------------------------------------------------------------

/// 4-lane dot product.
#[inline]
pub fn vector_dot(lhs: Vector4, rhs: Vector4) -> DotResult {
    DotResult { lhs, rhs }
}

/// 3-lane dot product; w is ignored.
#[inline]
pub fn vector_dot3(lhs: Vector4, rhs: Vector4) -> Dot3Result {
    Dot3Result { lhs, rhs }
}

/// Squared 4-lane length.
#[inline]
pub fn vector_length_squared(input: Vector4) -> DotResult {
    DotResult {
        lhs: input,
        rhs: input,
    }
}

/// Squared 3-lane length; w is ignored.
#[inline]
pub fn vector_length_squared3(input: Vector4) -> Dot3Result {
    Dot3Result {
        lhs: input,
        rhs: input,
    }
}

/// 4-lane Euclidean length.
#[inline]
pub fn vector_length(input: Vector4) -> LengthResult {
    LengthResult { input }
}

/// 3-lane Euclidean length; w is ignored.
#[inline]
pub fn vector_length3(input: Vector4) -> Length3Result {
    Length3Result { input }
}

/// Reciprocal of the 4-lane length.
#[inline]
pub fn vector_length_reciprocal(input: Vector4) -> LengthReciprocalResult {
    LengthReciprocalResult { input }
}

/// Reciprocal of the 3-lane length; w is ignored.
#[inline]
pub fn vector_length_reciprocal3(input: Vector4) -> LengthReciprocal3Result {
    LengthReciprocal3Result { input }
}

/// Euclidean distance between the first three lanes of `lhs` and `rhs`.
#[inline]
pub fn vector_distance3(lhs: Vector4, rhs: Vector4) -> Length3Result {
    Length3Result {
        input: vector_sub(lhs, rhs),
    }
}

/// The smallest of the four lanes, broadcast to every lane.
#[inline]
pub fn vector_get_min_component(input: Vector4) -> Vector4 {
    Vector4(active::min_component(input.0))
}

/// The largest of the four lanes, broadcast to every lane.
#[inline]
pub fn vector_get_max_component(input: Vector4) -> Vector4 {
    Vector4(active::max_component(input.0))
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[inline]
pub fn vector_add(lhs: Vector4, rhs: Vector4) -> Vector4 {
    Vector4(active::add(lhs.0, rhs.0))
}

#[inline]
pub fn vector_sub(lhs: Vector4, rhs: Vector4) -> Vector4 {
    Vector4(active::sub(lhs.0, rhs.0))
}

#[inline]
pub fn vector_mul(lhs: Vector4, rhs: Vector4) -> Vector4 {
    Vector4(active::mul(lhs.0, rhs.0))
}

#[inline]
pub fn vector_div(lhs: Vector4, rhs: Vector4) -> Vector4 {
    Vector4(active::div(lhs.0, rhs.0))
}

#[inline]
pub fn vector_min(lhs: Vector4, rhs: Vector4) -> Vector4 {
    Vector4(active::min(lhs.0, rhs.0))
}

#[inline]
pub fn vector_max(lhs: Vector4, rhs: Vector4) -> Vector4 {
    Vector4(active::max(lhs.0, rhs.0))
}

/// Clamps each lane into `[lo, hi]`. The operand order keeps a NaN `input`
/// lane propagating through both the max and the min on every backend.
#[inline]
pub fn vector_clamp(input: Vector4, lo: Vector4, hi: Vector4) -> Vector4 {
    vector_min(hi, vector_max(lo, input))
}

#[inline]
pub fn vector_abs(input: Vector4) -> Vector4 {
    Vector4(active::abs(input.0))
}

#[inline]
pub fn vector_neg(input: Vector4) -> Vector4 {
    Vector4(active::neg(input.0))
}

/// Per-lane reciprocal. SIMD backends refine the hardware estimate with two
/// Newton-Raphson iterations (~22 bits); the portable backend divides.
#[inline]
pub fn vector_reciprocal(input: Vector4) -> Vector4 {
    Vector4(active::reciprocal(input.0))
}

/// `v0 * v1 + v2` per lane.
#[inline]
pub fn vector_mul_add(v0: Vector4, v1: Vector4, v2: Vector4) -> Vector4 {
    Vector4(active::mul_add(v0.0, v1.0, v2.0))
}

/// `v2 - v0 * v1` per lane.
#[inline]
pub fn vector_neg_mul_sub(v0: Vector4, v1: Vector4, v2: Vector4) -> Vector4 {
    Vector4(active::neg_mul_sub(v0.0, v1.0, v2.0))
}

/// Linear interpolation. Formulated as
/// `mul_add(end, alpha, neg_mul_sub(start, alpha, start))` so the endpoints
/// are returned exactly at alpha 0 and 1.
#[inline]
pub fn vector_lerp(start: Vector4, end: Vector4, alpha: f32) -> Vector4 {
    let alpha = vector_broadcast(alpha);
    vector_mul_add(end, alpha, vector_neg_mul_sub(start, alpha, start))
}

/// `x - floor(x)` per lane.
#[inline]
pub fn vector_fraction(input: Vector4) -> Vector4 {
    vector_sub(input, vector_floor(input))
}

/// ±1.0 per lane carrying the lane's sign bit, so -0.0 yields -1.0.
#[inline]
pub fn vector_sign(input: Vector4) -> Vector4 {
    vector_copy_sign(vector_broadcast(1.0), input)
}

/// Each lane of `input` with the sign bit of the matching lane of `sign`.
#[inline]
pub fn vector_copy_sign(input: Vector4, sign: Vector4) -> Vector4 {
    Vector4(active::copy_sign(input.0, sign.0))
}

/// 3-lane cross product; the w lane of the result is zero.
#[inline]
pub fn vector_cross3(lhs: Vector4, rhs: Vector4) -> Vector4 {
    Vector4(active::cross3(lhs.0, rhs.0))
}

/// Normalizes the first three lanes. A zero or non-finite length follows
/// IEEE propagation (NaN/inf lanes); use [`vector_normalize3_safe`] when
/// the input may be degenerate.
#[inline]
pub fn vector_normalize3(input: Vector4) -> Vector4 {
    let length_squared = active::dot3(input.0, input.0);
    vector_mul(input, vector_broadcast(1.0 / length_squared.sqrt()))
}

/// Normalizes the first three lanes. When the squared length is below
/// `threshold` the input is considered degenerate and `default` is returned
/// unchanged.
#[inline]
pub fn vector_normalize3_safe(input: Vector4, default: Vector4, threshold: f32) -> Vector4 {
    let length_squared = active::dot3(input.0, input.0);
    if length_squared >= threshold {
        vector_mul(input, vector_broadcast(1.0 / length_squared.sqrt()))
    } else {
        default
    }
}

// ---------------------------------------------------------------------------
// Comparisons
// ---------------------------------------------------------------------------

#[inline]
pub fn vector_equal(lhs: Vector4, rhs: Vector4) -> Mask4 {
    Mask4(active::cmp_eq(lhs.0, rhs.0))
}

#[inline]
pub fn vector_less_than(lhs: Vector4, rhs: Vector4) -> Mask4 {
    Mask4(active::cmp_lt(lhs.0, rhs.0))
}

#[inline]
pub fn vector_less_equal(lhs: Vector4, rhs: Vector4) -> Mask4 {
    Mask4(active::cmp_le(lhs.0, rhs.0))
}

#[inline]
pub fn vector_greater_than(lhs: Vector4, rhs: Vector4) -> Mask4 {
    Mask4(active::cmp_gt(lhs.0, rhs.0))
}

#[inline]
pub fn vector_greater_equal(lhs: Vector4, rhs: Vector4) -> Mask4 {
    Mask4(active::cmp_ge(lhs.0, rhs.0))
}

/// Per-lane blend: takes `if_true` where the mask lane is set.
#[inline]
pub fn vector_select(mask: Mask4, if_true: Vector4, if_false: Vector4) -> Vector4 {
    Vector4(active::select(mask.0, if_true.0, if_false.0))
}

// ---------------------------------------------------------------------------
// Boolean reductions
//
// The 2- and 3-wide forms mask out the excluded lanes before reducing, so
// garbage in w (or z and w) never leaks into the result.
// ---------------------------------------------------------------------------

#[inline]
pub fn vector_all_less_than(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_all_true(active::cmp_lt(lhs.0, rhs.0), 4)
}

#[inline]
pub fn vector_all_less_than2(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_all_true(active::cmp_lt(lhs.0, rhs.0), 2)
}

#[inline]
pub fn vector_all_less_than3(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_all_true(active::cmp_lt(lhs.0, rhs.0), 3)
}

#[inline]
pub fn vector_any_less_than(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_any_true(active::cmp_lt(lhs.0, rhs.0), 4)
}

#[inline]
pub fn vector_any_less_than2(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_any_true(active::cmp_lt(lhs.0, rhs.0), 2)
}

#[inline]
pub fn vector_any_less_than3(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_any_true(active::cmp_lt(lhs.0, rhs.0), 3)
}

#[inline]
pub fn vector_all_less_equal(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_all_true(active::cmp_le(lhs.0, rhs.0), 4)
}

#[inline]
pub fn vector_all_less_equal2(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_all_true(active::cmp_le(lhs.0, rhs.0), 2)
}

#[inline]
pub fn vector_all_less_equal3(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_all_true(active::cmp_le(lhs.0, rhs.0), 3)
}

#[inline]
pub fn vector_any_less_equal(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_any_true(active::cmp_le(lhs.0, rhs.0), 4)
}

#[inline]
pub fn vector_any_less_equal2(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_any_true(active::cmp_le(lhs.0, rhs.0), 2)
}

#[inline]
pub fn vector_any_less_equal3(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_any_true(active::cmp_le(lhs.0, rhs.0), 3)
}

#[inline]
pub fn vector_all_greater_equal(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_all_true(active::cmp_ge(lhs.0, rhs.0), 4)
}

#[inline]
pub fn vector_all_greater_equal2(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_all_true(active::cmp_ge(lhs.0, rhs.0), 2)
}

#[inline]
pub fn vector_all_greater_equal3(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_all_true(active::cmp_ge(lhs.0, rhs.0), 3)
}

#[inline]
pub fn vector_any_greater_equal(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_any_true(active::cmp_ge(lhs.0, rhs.0), 4)
}

#[inline]
pub fn vector_any_greater_equal2(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_any_true(active::cmp_ge(lhs.0, rhs.0), 2)
}

#[inline]
pub fn vector_any_greater_equal3(lhs: Vector4, rhs: Vector4) -> bool {
    active::mask_any_true(active::cmp_ge(lhs.0, rhs.0), 3)
}

#[inline]
fn near_equal_mask(lhs: Vector4, rhs: Vector4, threshold: f32) -> active::MaskRepr {
    let delta = active::abs(active::sub(lhs.0, rhs.0));
    active::cmp_le(delta, active::splat(threshold))
}

/// `|lhs - rhs| <= threshold` on every lane.
#[inline]
pub fn vector_all_near_equal(lhs: Vector4, rhs: Vector4, threshold: f32) -> bool {
    active::mask_all_true(near_equal_mask(lhs, rhs, threshold), 4)
}

#[inline]
pub fn vector_all_near_equal2(lhs: Vector4, rhs: Vector4, threshold: f32) -> bool {
    active::mask_all_true(near_equal_mask(lhs, rhs, threshold), 2)
}

#[inline]
pub fn vector_all_near_equal3(lhs: Vector4, rhs: Vector4, threshold: f32) -> bool {
    active::mask_all_true(near_equal_mask(lhs, rhs, threshold), 3)
}

/// `|lhs - rhs| <= threshold` on at least one lane.
#[inline]
pub fn vector_any_near_equal(lhs: Vector4, rhs: Vector4, threshold: f32) -> bool {
    active::mask_any_true(near_equal_mask(lhs, rhs, threshold), 4)
}

#[inline]
pub fn vector_any_near_equal2(lhs: Vector4, rhs: Vector4, threshold: f32) -> bool {
    active::mask_any_true(near_equal_mask(lhs, rhs, threshold), 2)
}

#[inline]
pub fn vector_any_near_equal3(lhs: Vector4, rhs: Vector4, threshold: f32) -> bool {
    active::mask_any_true(near_equal_mask(lhs, rhs, threshold), 3)
}

/// [`vector_all_near_equal`] with [`DEFAULT_NEAR_EQUAL_THRESHOLD`].
#[inline]
pub fn vector_all_near_equal_default(lhs: Vector4, rhs: Vector4) -> bool {
    vector_all_near_equal(lhs, rhs, DEFAULT_NEAR_EQUAL_THRESHOLD)
}

#[inline]
pub fn vector_all_near_equal2_default(lhs: Vector4, rhs: Vector4) -> bool {
    vector_all_near_equal2(lhs, rhs, DEFAULT_NEAR_EQUAL_THRESHOLD)
}

#[inline]
pub fn vector_all_near_equal3_default(lhs: Vector4, rhs: Vector4) -> bool {
    vector_all_near_equal3(lhs, rhs, DEFAULT_NEAR_EQUAL_THRESHOLD)
}

#[inline]
pub fn vector_any_near_equal_default(lhs: Vector4, rhs: Vector4) -> bool {
    vector_any_near_equal(lhs, rhs, DEFAULT_NEAR_EQUAL_THRESHOLD)
}

#[inline]
pub fn vector_any_near_equal2_default(lhs: Vector4, rhs: Vector4) -> bool {
    vector_any_near_equal2(lhs, rhs, DEFAULT_NEAR_EQUAL_THRESHOLD)
}

#[inline]
pub fn vector_any_near_equal3_default(lhs: Vector4, rhs: Vector4) -> bool {
    vector_any_near_equal3(lhs, rhs, DEFAULT_NEAR_EQUAL_THRESHOLD)
}

/// True when all four lanes are finite (neither NaN nor infinite).
#[inline]
pub fn vector_is_finite(input: Vector4) -> bool {
    active::all_finite(input.0, 4)
}

/// True when the first two lanes are finite.
#[inline]
pub fn vector_is_finite2(input: Vector4) -> bool {
    active::all_finite(input.0, 2)
}

/// True when the first three lanes are finite.
#[inline]
pub fn vector_is_finite3(input: Vector4) -> bool {
    active::all_finite(input.0, 3)
}

// ---------------------------------------------------------------------------
// Swizzles
// ---------------------------------------------------------------------------

#[inline(always)]
fn mix_lane(selector: u32, lhs: Vector4, rhs: Vector4) -> f32 {
    if is_first_input(selector) {
        active::get_lane(lhs.0, selector_lane(selector))
    } else {
        active::get_lane(rhs.0, selector_lane(selector))
    }
}

/// Builds a vector from any four of the eight input lanes. Selectors 0..=3
/// name the x, y, z, w lanes of `lhs`; 4..=7 name the a, b, c, d lanes of
/// `rhs` (see [`Mix`](crate::mix::Mix)).
///
/// The selector tests below are on const generics, so each instantiation
/// folds to a single branch-free path. Patterns with a dedicated
/// instruction (identities, broadcasts, 2+2 merges, interleaves) take it;
/// anything else gathers lanes individually.
#[inline]
pub fn vector_mix<const C0: u32, const C1: u32, const C2: u32, const C3: u32>(
    lhs: Vector4,
    rhs: Vector4,
) -> Vector4 {
    if C0 == 0 && C1 == 1 && C2 == 2 && C3 == 3 {
        return lhs;
    }
    if C0 == 4 && C1 == 5 && C2 == 6 && C3 == 7 {
        return rhs;
    }

    if C0 == C1 && C1 == C2 && C2 == C3 {
        let input = if is_first_input(C0) { lhs } else { rhs };
        let repr = match selector_lane(C0) {
            0 => active::dup_x(input.0),
            1 => active::dup_y(input.0),
            2 => active::dup_z(input.0),
            _ => active::dup_w(input.0),
        };
        return Vector4(repr);
    }

    if C0 == 0 && C1 == 1 && C2 == 4 && C3 == 5 {
        return Vector4(active::merge_low(lhs.0, rhs.0));
    }
    if C0 == 4 && C1 == 5 && C2 == 0 && C3 == 1 {
        return Vector4(active::merge_low(rhs.0, lhs.0));
    }
    if C0 == 2 && C1 == 3 && C2 == 6 && C3 == 7 {
        return Vector4(active::merge_high(lhs.0, rhs.0));
    }
    if C0 == 6 && C1 == 7 && C2 == 2 && C3 == 3 {
        return Vector4(active::merge_high(rhs.0, lhs.0));
    }

    if C0 == 0 && C1 == 4 && C2 == 1 && C3 == 5 {
        return Vector4(active::interleave_lo(lhs.0, rhs.0));
    }
    if C0 == 4 && C1 == 0 && C2 == 5 && C3 == 1 {
        return Vector4(active::interleave_lo(rhs.0, lhs.0));
    }
    if C0 == 2 && C1 == 6 && C2 == 3 && C3 == 7 {
        return Vector4(active::interleave_hi(lhs.0, rhs.0));
    }
    if C0 == 6 && C1 == 2 && C2 == 7 && C3 == 3 {
        return Vector4(active::interleave_hi(rhs.0, lhs.0));
    }

    Vector4(active::new(
        mix_lane(C0, lhs, rhs),
        mix_lane(C1, lhs, rhs),
        mix_lane(C2, lhs, rhs),
        mix_lane(C3, lhs, rhs),
    ))
}

/// Broadcasts the x lane.
#[inline]
pub fn vector_dup_x(input: Vector4) -> Vector4 {
    Vector4(active::dup_x(input.0))
}

/// Broadcasts the y lane.
#[inline]
pub fn vector_dup_y(input: Vector4) -> Vector4 {
    Vector4(active::dup_y(input.0))
}

/// Broadcasts the z lane.
#[inline]
pub fn vector_dup_z(input: Vector4) -> Vector4 {
    Vector4(active::dup_z(input.0))
}

/// Broadcasts the w lane.
#[inline]
pub fn vector_dup_w(input: Vector4) -> Vector4 {
    Vector4(active::dup_w(input.0))
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

/// Per-lane floor. NaN and ±inf lanes pass through unchanged.
#[inline]
pub fn vector_floor(input: Vector4) -> Vector4 {
    Vector4(active::math::floor(input.0))
}

/// Per-lane ceiling. NaN and ±inf lanes pass through unchanged.
#[inline]
pub fn vector_ceil(input: Vector4) -> Vector4 {
    Vector4(active::math::ceil(input.0))
}

/// Rounds half away from zero. NaN, ±inf, and lanes with |x| >= 2^23 pass
/// through unchanged.
#[inline]
pub fn vector_round_symmetric(input: Vector4) -> Vector4 {
    Vector4(active::math::round_symmetric(input.0))
}

/// Rounds half to even, with the same specials contract as
/// [`vector_round_symmetric`].
#[inline]
pub fn vector_round_bankers(input: Vector4) -> Vector4 {
    Vector4(active::math::round_bankers(input.0))
}

// ---------------------------------------------------------------------------
// Transcendentals
// ---------------------------------------------------------------------------

/// Per-lane sine, valid over all of f32 (range-reduced internally).
#[inline]
pub fn vector_sin(angle: Vector4) -> Vector4 {
    Vector4(active::math::sin(angle.0))
}

/// Per-lane cosine.
#[inline]
pub fn vector_cos(angle: Vector4) -> Vector4 {
    Vector4(active::math::cos(angle.0))
}

/// Per-lane tangent. Lanes where the cosine is exactly zero yield ±inf with
/// the sign of the input angle instead of the NaN a plain 0/0 would give.
#[inline]
pub fn vector_tan(angle: Vector4) -> Vector4 {
    let sin = vector_sin(angle);
    let cos = vector_cos(angle);
    let at_pole = vector_equal(cos, vector_zero());
    let pole = vector_copy_sign(vector_broadcast(f32::INFINITY), angle);
    vector_select(at_pole, pole, vector_div(sin, cos))
}

/// Per-lane arcsine of values in [-1, 1].
#[inline]
pub fn vector_asin(input: Vector4) -> Vector4 {
    Vector4(active::math::asin(input.0))
}

/// Per-lane arccosine of values in [-1, 1].
#[inline]
pub fn vector_acos(input: Vector4) -> Vector4 {
    Vector4(active::math::acos(input.0))
}

/// Per-lane arctangent.
#[inline]
pub fn vector_atan(input: Vector4) -> Vector4 {
    Vector4(active::math::atan(input.0))
}

/// Per-lane two-argument arctangent. `atan2(0, 0)` is 0; a zero `x` lane
/// yields ±π/2; a negative `x` lane adds ±π to fold into the left
/// half-plane.
#[inline]
pub fn vector_atan2(y: Vector4, x: Vector4) -> Vector4 {
    Vector4(active::math::atan2(y.0, x.0))
}
