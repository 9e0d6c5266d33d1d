//! SSE4.1 backend operating on `__m128` registers.
//!
//! Comparison results are `__m128` values whose lanes are all-ones or
//! all-zeros; reductions go through `_mm_movemask_ps` with the relevant
//! lane bits masked off.

pub(crate) mod math;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

pub(crate) type Repr = __m128;
pub(crate) type MaskRepr = __m128;

const SIGN_BITS: u32 = 0x8000_0000;
const ABS_BITS: u32 = 0x7FFF_FFFF;

#[inline(always)]
fn sign_mask() -> __m128 {
    unsafe { _mm_set1_ps(f32::from_bits(SIGN_BITS)) }
}

#[inline(always)]
fn abs_mask() -> __m128 {
    unsafe { _mm_set1_ps(f32::from_bits(ABS_BITS)) }
}

#[inline(always)]
pub(crate) fn new(x: f32, y: f32, z: f32, w: f32) -> Repr {
    unsafe { _mm_set_ps(w, z, y, x) }
}

#[inline(always)]
pub(crate) fn splat(value: f32) -> Repr {
    unsafe { _mm_set1_ps(value) }
}

#[inline(always)]
pub(crate) fn zero() -> Repr {
    unsafe { _mm_setzero_ps() }
}

#[inline(always)]
pub(crate) fn load(input: &[f32; 4]) -> Repr {
    unsafe { _mm_loadu_ps(input.as_ptr()) }
}

#[inline(always)]
pub(crate) fn store(input: Repr, output: &mut [f32; 4]) {
    unsafe { _mm_storeu_ps(output.as_mut_ptr(), input) }
}

#[inline(always)]
pub(crate) fn get_lane(input: Repr, lane: usize) -> f32 {
    unsafe {
        match lane {
            0 => _mm_cvtss_f32(input),
            1 => _mm_cvtss_f32(_mm_shuffle_ps(input, input, 0b01_01_01_01)),
            2 => _mm_cvtss_f32(_mm_shuffle_ps(input, input, 0b10_10_10_10)),
            _ => _mm_cvtss_f32(_mm_shuffle_ps(input, input, 0b11_11_11_11)),
        }
    }
}

#[inline(always)]
pub(crate) fn set_x(input: Repr, value: f32) -> Repr {
    unsafe { _mm_move_ss(input, _mm_set_ss(value)) }
}

#[inline(always)]
pub(crate) fn set_y(input: Repr, value: f32) -> Repr {
    unsafe { _mm_insert_ps(input, _mm_set_ss(value), 0x10) }
}

#[inline(always)]
pub(crate) fn set_z(input: Repr, value: f32) -> Repr {
    unsafe { _mm_insert_ps(input, _mm_set_ss(value), 0x20) }
}

#[inline(always)]
pub(crate) fn set_w(input: Repr, value: f32) -> Repr {
    unsafe { _mm_insert_ps(input, _mm_set_ss(value), 0x30) }
}

#[inline(always)]
pub(crate) fn dup_x(input: Repr) -> Repr {
    unsafe { _mm_shuffle_ps(input, input, 0b00_00_00_00) }
}

#[inline(always)]
pub(crate) fn dup_y(input: Repr) -> Repr {
    unsafe { _mm_shuffle_ps(input, input, 0b01_01_01_01) }
}

#[inline(always)]
pub(crate) fn dup_z(input: Repr) -> Repr {
    unsafe { _mm_shuffle_ps(input, input, 0b10_10_10_10) }
}

#[inline(always)]
pub(crate) fn dup_w(input: Repr) -> Repr {
    unsafe { _mm_shuffle_ps(input, input, 0b11_11_11_11) }
}

#[inline(always)]
pub(crate) fn add(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_add_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn sub(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_sub_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn mul(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_mul_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn div(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_div_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn min(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_min_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn max(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_max_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn abs(input: Repr) -> Repr {
    unsafe { _mm_and_ps(input, abs_mask()) }
}

#[inline(always)]
pub(crate) fn neg(input: Repr) -> Repr {
    unsafe { _mm_xor_ps(input, sign_mask()) }
}

#[inline(always)]
pub(crate) fn mul_add(v0: Repr, v1: Repr, v2: Repr) -> Repr {
    unsafe { _mm_add_ps(_mm_mul_ps(v0, v1), v2) }
}

#[inline(always)]
pub(crate) fn neg_mul_sub(v0: Repr, v1: Repr, v2: Repr) -> Repr {
    unsafe { _mm_sub_ps(v2, _mm_mul_ps(v0, v1)) }
}

/// Two passes of Newton-Raphson iteration on the hardware estimate.
#[inline(always)]
pub(crate) fn reciprocal(input: Repr) -> Repr {
    unsafe {
        let x0 = _mm_rcp_ps(input);

        // First iteration
        let x1 = _mm_sub_ps(_mm_add_ps(x0, x0), _mm_mul_ps(input, _mm_mul_ps(x0, x0)));

        // Second iteration
        _mm_sub_ps(_mm_add_ps(x1, x1), _mm_mul_ps(input, _mm_mul_ps(x1, x1)))
    }
}

#[inline(always)]
pub(crate) fn copy_sign(input: Repr, control_sign: Repr) -> Repr {
    unsafe {
        _mm_or_ps(
            _mm_and_ps(input, abs_mask()),
            _mm_and_ps(control_sign, sign_mask()),
        )
    }
}

// The SSE4 dot product instruction isn't precise enough; shuffle and add
// pairwise instead.
#[inline(always)]
fn dot4_reduce(lhs: Repr, rhs: Repr) -> Repr {
    unsafe {
        let x2_y2_z2_w2 = _mm_mul_ps(lhs, rhs);
        let z2_w2_0_0 = _mm_shuffle_ps(x2_y2_z2_w2, x2_y2_z2_w2, 0b00_00_11_10);
        let x2z2_y2w2_0_0 = _mm_add_ps(x2_y2_z2_w2, z2_w2_0_0);
        let y2w2_0_0_0 = _mm_shuffle_ps(x2z2_y2w2_0_0, x2z2_y2w2_0_0, 0b00_00_00_01);
        _mm_add_ps(x2z2_y2w2_0_0, y2w2_0_0_0)
    }
}

#[inline(always)]
pub(crate) fn dot4(lhs: Repr, rhs: Repr) -> f32 {
    unsafe { _mm_cvtss_f32(dot4_reduce(lhs, rhs)) }
}

#[inline(always)]
pub(crate) fn dot4_vector(lhs: Repr, rhs: Repr) -> Repr {
    let reduced = dot4_reduce(lhs, rhs);
    unsafe { _mm_shuffle_ps(reduced, reduced, 0b00_00_00_00) }
}

#[inline(always)]
pub(crate) fn dot3(lhs: Repr, rhs: Repr) -> f32 {
    unsafe {
        let x2_y2_z2_w2 = _mm_mul_ps(lhs, rhs);
        let y2 = _mm_shuffle_ps(x2_y2_z2_w2, x2_y2_z2_w2, 0b00_00_00_01);
        let z2 = _mm_shuffle_ps(x2_y2_z2_w2, x2_y2_z2_w2, 0b00_00_00_10);
        _mm_cvtss_f32(_mm_add_ss(_mm_add_ss(x2_y2_z2_w2, y2), z2))
    }
}

#[inline(always)]
pub(crate) fn dot3_vector(lhs: Repr, rhs: Repr) -> Repr {
    splat(dot3(lhs, rhs))
}

#[inline(always)]
pub(crate) fn cross3(lhs: Repr, rhs: Repr) -> Repr {
    unsafe {
        // cross(a, b).zxy = (a * b.yzx) - (a.yzx * b)
        let lhs_yzx = _mm_shuffle_ps(lhs, lhs, 0b11_00_10_01);
        let rhs_yzx = _mm_shuffle_ps(rhs, rhs, 0b11_00_10_01);
        let tmp_zxy = _mm_sub_ps(_mm_mul_ps(lhs, rhs_yzx), _mm_mul_ps(lhs_yzx, rhs));

        // cross(a, b) = ((a * b.yzx) - (a.yzx * b)).yzx
        _mm_shuffle_ps(tmp_zxy, tmp_zxy, 0b11_00_10_01)
    }
}

/// The smallest lane, broadcast to all four.
#[inline(always)]
pub(crate) fn min_component(input: Repr) -> Repr {
    unsafe {
        // min(v, v.yxwz) then min with the 2-wide rotation covers all lanes
        let swapped = _mm_shuffle_ps(input, input, 0b10_11_00_01);
        let partial = _mm_min_ps(input, swapped);
        let rotated = _mm_shuffle_ps(partial, partial, 0b01_00_11_10);
        _mm_min_ps(partial, rotated)
    }
}

/// The largest lane, broadcast to all four.
#[inline(always)]
pub(crate) fn max_component(input: Repr) -> Repr {
    unsafe {
        let swapped = _mm_shuffle_ps(input, input, 0b10_11_00_01);
        let partial = _mm_max_ps(input, swapped);
        let rotated = _mm_shuffle_ps(partial, partial, 0b01_00_11_10);
        _mm_max_ps(partial, rotated)
    }
}

#[inline(always)]
pub(crate) fn cmp_eq(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { _mm_cmpeq_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn cmp_lt(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { _mm_cmplt_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn cmp_le(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { _mm_cmple_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn cmp_gt(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { _mm_cmpgt_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn cmp_ge(lhs: Repr, rhs: Repr) -> MaskRepr {
    unsafe { _mm_cmpge_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn select(mask: MaskRepr, if_true: Repr, if_false: Repr) -> Repr {
    unsafe { _mm_blendv_ps(if_false, if_true, mask) }
}

#[inline(always)]
pub(crate) fn mask_all_true(mask: MaskRepr, lane_count: usize) -> bool {
    let lane_bits = (1 << lane_count) - 1;
    unsafe { _mm_movemask_ps(mask) & lane_bits == lane_bits }
}

#[inline(always)]
pub(crate) fn mask_any_true(mask: MaskRepr, lane_count: usize) -> bool {
    let lane_bits = (1 << lane_count) - 1;
    unsafe { _mm_movemask_ps(mask) & lane_bits != 0 }
}

#[inline(always)]
pub(crate) fn all_finite(input: Repr, lane_count: usize) -> bool {
    unsafe {
        let abs_input = _mm_and_ps(input, abs_mask());
        let is_infinity = _mm_cmpeq_ps(abs_input, _mm_set1_ps(f32::INFINITY));

        // value != value is only true for NaN
        let is_nan = _mm_cmpneq_ps(input, input);

        let is_not_finite = _mm_or_ps(is_infinity, is_nan);
        !mask_any_true(is_not_finite, lane_count)
    }
}

#[inline(always)]
pub(crate) fn interleave_lo(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_unpacklo_ps(lhs, rhs) }
}

#[inline(always)]
pub(crate) fn interleave_hi(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_unpackhi_ps(lhs, rhs) }
}

/// `[lhs.x, lhs.y, rhs.x, rhs.y]`
#[inline(always)]
pub(crate) fn merge_low(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_movelh_ps(lhs, rhs) }
}

/// `[lhs.z, lhs.w, rhs.z, rhs.w]`
#[inline(always)]
pub(crate) fn merge_high(lhs: Repr, rhs: Repr) -> Repr {
    unsafe { _mm_movehl_ps(rhs, lhs) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lanes(input: Repr) -> [f32; 4] {
        let mut output = [0.0; 4];
        store(input, &mut output);
        output
    }

    fn mask_lane_bits(mask: MaskRepr) -> [u32; 4] {
        lanes(mask).map(f32::to_bits)
    }

    #[test]
    fn lane_order_is_x_first() {
        let v = new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(lanes(v), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(get_lane(v, 0), 1.0);
        assert_eq!(get_lane(v, 3), 4.0);
    }

    #[test]
    fn set_lane_preserves_other_bits() {
        let v = new(1.0, -0.0, f32::NAN, 4.0);
        let patched = set_w(v, 8.0);
        let out = lanes(patched);
        assert_eq!(out[0].to_bits(), 1.0f32.to_bits());
        assert_eq!(out[1].to_bits(), (-0.0f32).to_bits());
        assert_eq!(out[2].to_bits(), f32::NAN.to_bits());
        assert_eq!(out[3], 8.0);
    }

    #[test]
    fn comparison_lanes_are_all_ones_or_zero() {
        let lhs = new(1.0, 5.0, 3.0, f32::NAN);
        let rhs = new(2.0, 4.0, 3.0, 1.0);
        let mask = cmp_lt(lhs, rhs);
        assert_eq!(mask_lane_bits(mask), [0xFFFF_FFFF, 0, 0, 0]);
    }

    #[test]
    fn select_is_bitwise() {
        let all_ones = f32::from_bits(0xFFFF_FFFF);
        let mask = cmp_ge(new(1.0, 0.0, 1.0, 0.0), splat(1.0));
        let picked = select(mask, splat(all_ones), zero());
        assert_eq!(
            mask_lane_bits(picked),
            [0xFFFF_FFFF, 0, 0xFFFF_FFFF, 0]
        );
    }

    #[test]
    fn partial_reductions_ignore_high_lanes() {
        let mask = cmp_lt(new(0.0, 0.0, 9.0, 9.0), splat(1.0));
        assert!(mask_all_true(mask, 2));
        assert!(!mask_all_true(mask, 3));
        assert!(!mask_any_true(cmp_lt(new(9.0, 9.0, 0.0, 0.0), splat(1.0)), 2));
    }

    #[test]
    fn merge_and_interleave_shapes() {
        let a = new(1.0, 2.0, 3.0, 4.0);
        let b = new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(lanes(merge_low(a, b)), [1.0, 2.0, 5.0, 6.0]);
        assert_eq!(lanes(merge_high(a, b)), [3.0, 4.0, 7.0, 8.0]);
        assert_eq!(lanes(interleave_lo(a, b)), [1.0, 5.0, 2.0, 6.0]);
        assert_eq!(lanes(interleave_hi(a, b)), [3.0, 7.0, 4.0, 8.0]);
    }

    #[test]
    fn component_extremes_broadcast() {
        let v = new(3.0, -1.0, 7.0, 0.5);
        assert_eq!(lanes(min_component(v)), [-1.0; 4]);
        assert_eq!(lanes(max_component(v)), [7.0; 4]);
    }

    #[test]
    fn reciprocal_refines_to_near_exact() {
        let input = new(1.0, 2.0, -4.0, 0.5);
        let out = lanes(reciprocal(input));
        let expected = [1.0, 0.5, -0.25, 2.0];
        for (o, e) in out.iter().zip(expected.iter()) {
            assert!((o - e).abs() < 1e-6);
        }
    }
}
