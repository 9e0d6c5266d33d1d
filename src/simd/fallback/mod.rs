//! Portable backend used when no SIMD register family is detected.
//!
//! Lanes live in a plain struct and every operation applies the per-lane
//! kernels from `crate::scalar`, keeping results aligned with the SIMD
//! backends (same polynomials, same specials contracts).

pub(crate) mod math;

use crate::scalar;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Repr {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) z: f32,
    pub(crate) w: f32,
}

/// Lanes are exactly `u32::MAX` (true) or `0` (false).
#[derive(Clone, Copy, Debug)]
pub(crate) struct MaskRepr {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) z: u32,
    pub(crate) w: u32,
}

#[inline(always)]
fn mask_value(condition: bool) -> u32 {
    if condition {
        u32::MAX
    } else {
        0
    }
}

#[inline(always)]
fn map(input: Repr, op: impl Fn(f32) -> f32) -> Repr {
    Repr {
        x: op(input.x),
        y: op(input.y),
        z: op(input.z),
        w: op(input.w),
    }
}

#[inline(always)]
fn zip(lhs: Repr, rhs: Repr, op: impl Fn(f32, f32) -> f32) -> Repr {
    Repr {
        x: op(lhs.x, rhs.x),
        y: op(lhs.y, rhs.y),
        z: op(lhs.z, rhs.z),
        w: op(lhs.w, rhs.w),
    }
}

#[inline(always)]
fn compare(lhs: Repr, rhs: Repr, op: impl Fn(f32, f32) -> bool) -> MaskRepr {
    MaskRepr {
        x: mask_value(op(lhs.x, rhs.x)),
        y: mask_value(op(lhs.y, rhs.y)),
        z: mask_value(op(lhs.z, rhs.z)),
        w: mask_value(op(lhs.w, rhs.w)),
    }
}

#[inline(always)]
pub(crate) fn new(x: f32, y: f32, z: f32, w: f32) -> Repr {
    Repr { x, y, z, w }
}

#[inline(always)]
pub(crate) fn splat(value: f32) -> Repr {
    new(value, value, value, value)
}

#[inline(always)]
pub(crate) fn zero() -> Repr {
    splat(0.0)
}

#[inline(always)]
pub(crate) fn load(input: &[f32; 4]) -> Repr {
    new(input[0], input[1], input[2], input[3])
}

#[inline(always)]
pub(crate) fn store(input: Repr, output: &mut [f32; 4]) {
    output[0] = input.x;
    output[1] = input.y;
    output[2] = input.z;
    output[3] = input.w;
}

#[inline(always)]
pub(crate) fn get_lane(input: Repr, lane: usize) -> f32 {
    match lane {
        0 => input.x,
        1 => input.y,
        2 => input.z,
        _ => input.w,
    }
}

#[inline(always)]
pub(crate) fn set_x(input: Repr, value: f32) -> Repr {
    Repr { x: value, ..input }
}

#[inline(always)]
pub(crate) fn set_y(input: Repr, value: f32) -> Repr {
    Repr { y: value, ..input }
}

#[inline(always)]
pub(crate) fn set_z(input: Repr, value: f32) -> Repr {
    Repr { z: value, ..input }
}

#[inline(always)]
pub(crate) fn set_w(input: Repr, value: f32) -> Repr {
    Repr { w: value, ..input }
}

#[inline(always)]
pub(crate) fn dup_x(input: Repr) -> Repr {
    splat(input.x)
}

#[inline(always)]
pub(crate) fn dup_y(input: Repr) -> Repr {
    splat(input.y)
}

#[inline(always)]
pub(crate) fn dup_z(input: Repr) -> Repr {
    splat(input.z)
}

#[inline(always)]
pub(crate) fn dup_w(input: Repr) -> Repr {
    splat(input.w)
}

#[inline(always)]
pub(crate) fn add(lhs: Repr, rhs: Repr) -> Repr {
    zip(lhs, rhs, |a, b| a + b)
}

#[inline(always)]
pub(crate) fn sub(lhs: Repr, rhs: Repr) -> Repr {
    zip(lhs, rhs, |a, b| a - b)
}

#[inline(always)]
pub(crate) fn mul(lhs: Repr, rhs: Repr) -> Repr {
    zip(lhs, rhs, |a, b| a * b)
}

#[inline(always)]
pub(crate) fn div(lhs: Repr, rhs: Repr) -> Repr {
    zip(lhs, rhs, |a, b| a / b)
}

#[inline(always)]
pub(crate) fn min(lhs: Repr, rhs: Repr) -> Repr {
    zip(lhs, rhs, f32::min)
}

#[inline(always)]
pub(crate) fn max(lhs: Repr, rhs: Repr) -> Repr {
    zip(lhs, rhs, f32::max)
}

#[inline(always)]
pub(crate) fn abs(input: Repr) -> Repr {
    map(input, f32::abs)
}

#[inline(always)]
pub(crate) fn neg(input: Repr) -> Repr {
    map(input, |v| -v)
}

#[inline(always)]
pub(crate) fn mul_add(v0: Repr, v1: Repr, v2: Repr) -> Repr {
    new(
        (v0.x * v1.x) + v2.x,
        (v0.y * v1.y) + v2.y,
        (v0.z * v1.z) + v2.z,
        (v0.w * v1.w) + v2.w,
    )
}

#[inline(always)]
pub(crate) fn neg_mul_sub(v0: Repr, v1: Repr, v2: Repr) -> Repr {
    new(
        v2.x - (v0.x * v1.x),
        v2.y - (v0.y * v1.y),
        v2.z - (v0.z * v1.z),
        v2.w - (v0.w * v1.w),
    )
}

#[inline(always)]
pub(crate) fn reciprocal(input: Repr) -> Repr {
    map(input, |v| 1.0 / v)
}

#[inline(always)]
pub(crate) fn copy_sign(input: Repr, control_sign: Repr) -> Repr {
    zip(input, control_sign, f32::copysign)
}

#[inline(always)]
pub(crate) fn dot4(lhs: Repr, rhs: Repr) -> f32 {
    (lhs.x * rhs.x) + (lhs.y * rhs.y) + (lhs.z * rhs.z) + (lhs.w * rhs.w)
}

#[inline(always)]
pub(crate) fn dot4_vector(lhs: Repr, rhs: Repr) -> Repr {
    splat(dot4(lhs, rhs))
}

#[inline(always)]
pub(crate) fn dot3(lhs: Repr, rhs: Repr) -> f32 {
    (lhs.x * rhs.x) + (lhs.y * rhs.y) + (lhs.z * rhs.z)
}

#[inline(always)]
pub(crate) fn dot3_vector(lhs: Repr, rhs: Repr) -> Repr {
    splat(dot3(lhs, rhs))
}

#[inline(always)]
pub(crate) fn cross3(lhs: Repr, rhs: Repr) -> Repr {
    // cross(a, b) = (a.yzx * b.zxy) - (a.zxy * b.yzx)
    new(
        (lhs.y * rhs.z) - (lhs.z * rhs.y),
        (lhs.z * rhs.x) - (lhs.x * rhs.z),
        (lhs.x * rhs.y) - (lhs.y * rhs.x),
        0.0,
    )
}

/// The smallest lane, broadcast to all four.
#[inline(always)]
pub(crate) fn min_component(input: Repr) -> Repr {
    splat(input.x.min(input.y).min(input.z.min(input.w)))
}

/// The largest lane, broadcast to all four.
#[inline(always)]
pub(crate) fn max_component(input: Repr) -> Repr {
    splat(input.x.max(input.y).max(input.z.max(input.w)))
}

#[inline(always)]
pub(crate) fn cmp_eq(lhs: Repr, rhs: Repr) -> MaskRepr {
    compare(lhs, rhs, |a, b| a == b)
}

#[inline(always)]
pub(crate) fn cmp_lt(lhs: Repr, rhs: Repr) -> MaskRepr {
    compare(lhs, rhs, |a, b| a < b)
}

#[inline(always)]
pub(crate) fn cmp_le(lhs: Repr, rhs: Repr) -> MaskRepr {
    compare(lhs, rhs, |a, b| a <= b)
}

#[inline(always)]
pub(crate) fn cmp_gt(lhs: Repr, rhs: Repr) -> MaskRepr {
    compare(lhs, rhs, |a, b| a > b)
}

#[inline(always)]
pub(crate) fn cmp_ge(lhs: Repr, rhs: Repr) -> MaskRepr {
    compare(lhs, rhs, |a, b| a >= b)
}

#[inline(always)]
pub(crate) fn select(mask: MaskRepr, if_true: Repr, if_false: Repr) -> Repr {
    new(
        scalar::select(mask.x, if_true.x, if_false.x),
        scalar::select(mask.y, if_true.y, if_false.y),
        scalar::select(mask.z, if_true.z, if_false.z),
        scalar::select(mask.w, if_true.w, if_false.w),
    )
}

#[inline(always)]
fn mask_lanes(mask: MaskRepr) -> [u32; 4] {
    [mask.x, mask.y, mask.z, mask.w]
}

#[inline(always)]
pub(crate) fn mask_all_true(mask: MaskRepr, lane_count: usize) -> bool {
    mask_lanes(mask)[..lane_count].iter().all(|&lane| lane != 0)
}

#[inline(always)]
pub(crate) fn mask_any_true(mask: MaskRepr, lane_count: usize) -> bool {
    mask_lanes(mask)[..lane_count].iter().any(|&lane| lane != 0)
}

#[inline(always)]
pub(crate) fn all_finite(input: Repr, lane_count: usize) -> bool {
    [input.x, input.y, input.z, input.w][..lane_count]
        .iter()
        .all(|&lane| scalar::is_finite(lane))
}

#[inline(always)]
pub(crate) fn interleave_lo(lhs: Repr, rhs: Repr) -> Repr {
    new(lhs.x, rhs.x, lhs.y, rhs.y)
}

#[inline(always)]
pub(crate) fn interleave_hi(lhs: Repr, rhs: Repr) -> Repr {
    new(lhs.z, rhs.z, lhs.w, rhs.w)
}

/// `[lhs.x, lhs.y, rhs.x, rhs.y]`
#[inline(always)]
pub(crate) fn merge_low(lhs: Repr, rhs: Repr) -> Repr {
    new(lhs.x, lhs.y, rhs.x, rhs.y)
}

/// `[lhs.z, lhs.w, rhs.z, rhs.w]`
#[inline(always)]
pub(crate) fn merge_high(lhs: Repr, rhs: Repr) -> Repr {
    new(lhs.z, lhs.w, rhs.z, rhs.w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_lanes_are_all_ones_or_zero() {
        let mask = cmp_lt(new(1.0, 5.0, 3.0, f32::NAN), new(2.0, 4.0, 3.0, 1.0));
        assert_eq!([mask.x, mask.y, mask.z, mask.w], [u32::MAX, 0, 0, 0]);
    }

    #[test]
    fn partial_reductions_ignore_high_lanes() {
        let mask = cmp_lt(new(0.0, 0.0, 9.0, 9.0), splat(1.0));
        assert!(mask_all_true(mask, 2));
        assert!(!mask_all_true(mask, 3));
    }

    #[test]
    fn component_extremes_broadcast() {
        let v = new(3.0, -1.0, 7.0, 0.5);
        let mut out = [0.0; 4];
        store(min_component(v), &mut out);
        assert_eq!(out, [-1.0; 4]);
        store(max_component(v), &mut out);
        assert_eq!(out, [7.0; 4]);
    }

    #[test]
    fn merge_and_interleave_shapes() {
        let a = new(1.0, 2.0, 3.0, 4.0);
        let b = new(5.0, 6.0, 7.0, 8.0);
        let mut out = [0.0; 4];
        store(merge_low(a, b), &mut out);
        assert_eq!(out, [1.0, 2.0, 5.0, 6.0]);
        store(interleave_hi(a, b), &mut out);
        assert_eq!(out, [3.0, 7.0, 4.0, 8.0]);
    }
}
