//! ARM NEON backend operating on `float32x4_t` registers.
//!
//! Comparison results are `uint32x4_t` values whose lanes are all-ones or
//! all-zeros; reductions use the horizontal min/max instructions with the
//! excluded lanes forced so they cannot affect the result.

pub(crate) mod math;

use core::arch::aarch64::*;

pub(crate) type Repr = float32x4_t;
pub(crate) type MaskRepr = uint32x4_t;

const SIGN_BITS: u32 = 0x8000_0000;

#[inline(always)]
fn sign_bits() -> uint32x4_t {
    unsafe { vdupq_n_u32(SIGN_BITS) }
}

#[inline(always)]
pub(crate) fn new(x: f32, y: f32, z: f32, w: f32) -> Repr {
    let values = [x, y, z, w];
    unsafe { vld1q_f32(values.as_ptr()) }
}

#[inline(always)]
pub(crate) fn splat(value: f32) -> Repr {
    unsafe { vdupq_n_f32(value) }
}

#[inline(always)]
pub(crate) fn zero() -> Repr {
    splat(0.0)
}

#[inline(always)]
pub(crate) fn load(input: &[f32; 4]) -> Repr {
    unsafe { vld1q_f32(input.as_ptr()) }
}

#[inline(always)]
pub(crate) fn store(input: Repr, output: &mut [f32; 4]) {
    unsafe { vst1q_f32(output.as_mut_ptr(), input) }
}

#[inline(always)]
pub(crate) fn get_lane(input: Repr, lane: usize) -> f32 {
    unsafe {
        match lane {
            0 => vgetq_lane_f32(input, 0),
            1 => vgetq_lane_f32(input, 1),
            2 => vgetq_lane_f32(input, 2),
            _ => vgetq_lane_f32(input, 3),
        }
    }
}

#[inline(always)]
pub(crate) fn set_x(input: Repr, value: f32) -> Repr {
    unsafe { vsetq_lane_f32(value, input, 0) }
}

#[inline(always)]
pub(crate) fn set_y(input: Repr, value: f32) -> Repr {
    unsafe { vsetq_lane_f32(value, input, 1) }
}

#[inline(always)]
pub(crate) fn set_z(input: Repr, value: f32) -> Repr {
    unsafe { vsetq_lane_f32(value, input, 2) }
}

#[inline(always)]
pub(crate) fn set_w(input: Repr, value: f32) -> Repr {
    unsafe { vsetq_lane_f32(value, input, 3) }
}

#[inline(always)]
pub(crate) fn dup_x(input: Repr) -> Repr {
    unsafe { vdupq_laneq_f32(input, 0) }
}

#[inline(always)]
pub(crate) fn dup_y(input: Repr) -> Repr {
    unsafe { vdupq_laneq_f32(input, 1) }
}

#[inline(always)]
pub(crate) fn dup_z(input: Repr) -> Repr {
    unsafe { vdupq_laneq_f32(input, 2) }
}

#[inline(always)]
pub(crate) fn dup_w(input: Repr) -> Repr {
    unsafe { vdupq_laneq_f32(input, 3) }
}

#[inline(always)]
pub(crate) fn add(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vaddq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn sub(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vsubq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn mul(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vmulq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn div(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vdivq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn min(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vminq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn max(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vmaxq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn abs(input: Repr) -> Repr {
    unsafe { vabsq_f32(input) }
}

#[inline(always)]
pub(crate) fn neg(input: Repr) -> Repr {
    unsafe { vnegq_f32(input) }
}

#[inline(always)]
pub(crate) fn mul_add(v0: Repr, v1: Repr, v2: Repr) -> Repr {
    unsafe { vfmaq_f32(v2, v0, v1) }
}

#[inline(always)]
pub(crate) fn neg_mul_sub(v0: Repr, v1: Repr, v2: Repr) -> Repr {
    unsafe { vfmsq_f32(v2, v0, v1) }
}

/// Two passes of Newton-Raphson iteration on the hardware estimate.
#[inline(always)]
pub(crate) fn reciprocal(input: Repr) -> Repr {
    unsafe {
        let x0 = vrecpeq_f32(input);

        // First iteration
        let x1 = vmulq_f32(x0, vrecpsq_f32(x0, input));

        // Second iteration
        vmulq_f32(x1, vrecpsq_f32(x1, input))
    }
}

#[inline(always)]
pub(crate) fn copy_sign(input: Repr, control_sign: Repr) -> Repr {
    unsafe { vbslq_f32(sign_bits(), control_sign, input) }
}

#[inline(always)]
pub(crate) fn dot4(lhs: Repr, rhs: Repr) -> f32 {
    unsafe { vaddvq_f32(vmulq_f32(lhs, rhs)) }
}

#[inline(always)]
pub(crate) fn dot4_vector(lhs: Repr, rhs: Repr) -> Repr {
    splat(dot4(lhs, rhs))
}

#[inline(always)]
pub(crate) fn dot3(lhs: Repr, rhs: Repr) -> f32 {
    unsafe {
        let products = vmulq_f32(lhs, rhs);
        vaddvq_f32(vsetq_lane_f32(0.0, products, 3))
    }
}

#[inline(always)]
pub(crate) fn dot3_vector(lhs: Repr, rhs: Repr) -> Repr {
    splat(dot3(lhs, rhs))
}

#[inline(always)]
pub(crate) fn cross3(lhs: Repr, rhs: Repr) -> Repr {
    // cross(a, b) = (a.yzx * b.zxy) - (a.zxy * b.yzx)
    let lhs_x = get_lane(lhs, 0);
    let lhs_y = get_lane(lhs, 1);
    let lhs_z = get_lane(lhs, 2);
    let rhs_x = get_lane(rhs, 0);
    let rhs_y = get_lane(rhs, 1);
    let rhs_z = get_lane(rhs, 2);
    new(
        (lhs_y * rhs_z) - (lhs_z * rhs_y),
        (lhs_z * rhs_x) - (lhs_x * rhs_z),
        (lhs_x * rhs_y) - (lhs_y * rhs_x),
        0.0,
    )
}

/// The smallest lane, broadcast to all four.
#[inline(always)]
pub(crate) fn min_component(input: Repr) -> Repr {
    unsafe { vdupq_n_f32(vminvq_f32(input)) }
}

/// The largest lane, broadcast to all four.
#[inline(always)]
pub(crate) fn max_component(input: Repr) -> Repr {
    unsafe { vdupq_n_f32(vmaxvq_f32(input)) }
}

#[inline(always)]
pub(crate) fn cmp_eq(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { vceqq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn cmp_lt(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { vcltq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn cmp_le(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { vcleq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn cmp_gt(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { vcgtq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn cmp_ge(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { vcgeq_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn select(mask: MaskRepr, if_true: Repr, if_false: Repr) -> Repr {
    unsafe { vbslq_f32(mask, if_true, if_false) }
}

#[inline(always)]
pub(crate) fn mask_all_true(mask: MaskRepr, lane_count: usize) -> bool {
    unsafe {
        match lane_count {
            2 => vminv_u32(vget_low_u32(mask)) != 0,
            3 => vminvq_u32(vsetq_lane_u32(u32::MAX, mask, 3)) != 0,
            _ => vminvq_u32(mask) != 0,
        }
    }
}

#[inline(always)]
pub(crate) fn mask_any_true(mask: MaskRepr, lane_count: usize) -> bool {
    unsafe {
        match lane_count {
            2 => vmaxv_u32(vget_low_u32(mask)) != 0,
            3 => vmaxvq_u32(vsetq_lane_u32(0, mask, 3)) != 0,
            _ => vmaxvq_u32(mask) != 0,
        }
    }
}

#[inline(always)]
pub(crate) fn all_finite(input: Repr, lane_count: usize) -> bool {
    unsafe {
        let is_infinity = vceqq_f32(vabsq_f32(input), vdupq_n_f32(f32::INFINITY));

        // value == value is only false for NaN
        let is_nan = vmvnq_u32(vceqq_f32(input, input));

        let is_not_finite = vorrq_u32(is_infinity, is_nan);
        !mask_any_true(is_not_finite, lane_count)
    }
}

#[inline(always)]
pub(crate) fn interleave_lo(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vzip1q_f32(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn interleave_hi(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vzip2q_f32(lhs, rhs) }
}

/// `[lhs.x, lhs.y, rhs.x, rhs.y]`
#[inline(always)]
pub(crate) fn merge_low(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vcombine_f32(vget_low_f32(lhs), vget_low_f32(rhs)) }
}

/// `[lhs.z, lhs.w, rhs.z, rhs.w]`
#[inline(always)]
pub(crate) fn merge_high(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { vcombine_f32(vget_high_f32(lhs), vget_high_f32(rhs)) }
}
