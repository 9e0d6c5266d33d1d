//! Rounding and transcendental kernels for the NEON backend.
//!
//! Same algorithms and coefficients as the SSE backend, expressed with
//! NEON bit-select and fused multiply-add instructions; see
//! `simd::polynomials` for the coefficient provenance.

use core::arch::aarch64::*;

use crate::simd::neon::{reciprocal, select, Repr};
use crate::simd::polynomials::*;

#[inline(always)]
pub(crate) fn floor(input: Repr) -> Repr {
    unsafe { vrndmq_f32(input) }
}

#[inline(always)]
pub(crate) fn ceil(input: Repr) -> Repr {
    unsafe { vrndpq_f32(input) }
}

/// Rounds half to even. The rounding instruction leaves NaN, ±inf, and
/// values with no fractional part unchanged.
#[inline(always)]
pub(crate) fn round_bankers(input: Repr) -> Repr {
    unsafe { vrndnq_f32(input) }
}

/// Rounds half away from zero, same specials contract as
/// [`round_bankers`].
#[inline(always)]
pub(crate) fn round_symmetric(input: Repr) -> Repr {
    unsafe { vrndaq_f32(input) }
}

#[inline(always)]
fn float_bits(input: Repr) -> uint32x4_t {
    unsafe { vreinterpretq_u32_f32(input) }
}

#[inline(always)]
fn bits_float(input: uint32x4_t) -> Repr {
    unsafe { vreinterpretq_f32_u32(input) }
}

/// Remaps the angle into [-π/2, π/2]; also returns the mask of lanes that
/// did not need reflecting about ±π/2.
#[inline(always)]
unsafe fn reduce_half_pi(angle: Repr) -> (Repr, uint32x4_t) {
    // Remap our input in the [-pi, pi] range
    let quotient = round_bankers(vmulq_n_f32(angle, 1.0 / TWO_PI));
    let x = vsubq_f32(angle, vmulq_n_f32(quotient, TWO_PI));

    // Remap our input in the [-pi/2, pi/2] range
    let sign_bits = vdupq_n_u32(0x8000_0000);
    let sign = vandq_u32(float_bits(x), sign_bits);
    let reference = bits_float(vorrq_u32(sign, float_bits(vdupq_n_f32(PI))));

    let reflection = vsubq_f32(reference, x);
    let is_less_equal_than_half_pi = vcleq_f32(vabsq_f32(x), vdupq_n_f32(HALF_PI));

    (
        select(is_less_equal_than_half_pi, x, reflection),
        is_less_equal_than_half_pi,
    )
}

pub(crate) fn sin(angle: Repr) -> Repr {
    unsafe {
        let (x, _) = reduce_half_pi(angle);

        let x2 = vmulq_f32(x, x);
        let mut result = vfmaq_f32(vdupq_n_f32(SIN_COEFF_4), x2, vdupq_n_f32(SIN_COEFF_5));
        result = vfmaq_f32(vdupq_n_f32(SIN_COEFF_3), result, x2);
        result = vfmaq_f32(vdupq_n_f32(SIN_COEFF_2), result, x2);
        result = vfmaq_f32(vdupq_n_f32(SIN_COEFF_1), result, x2);
        result = vfmaq_f32(vdupq_n_f32(1.0), result, x2);
        vmulq_f32(result, x)
    }
}

pub(crate) fn cos(angle: Repr) -> Repr {
    unsafe {
        let (x, is_less_equal_than_half_pi) = reduce_half_pi(angle);

        let x2 = vmulq_f32(x, x);
        let mut result = vfmaq_f32(vdupq_n_f32(COS_COEFF_4), x2, vdupq_n_f32(COS_COEFF_5));
        result = vfmaq_f32(vdupq_n_f32(COS_COEFF_3), result, x2);
        result = vfmaq_f32(vdupq_n_f32(COS_COEFF_2), result, x2);
        result = vfmaq_f32(vdupq_n_f32(COS_COEFF_1), result, x2);
        result = vfmaq_f32(vdupq_n_f32(1.0), result, x2);

        // Reflected lanes flip sign
        let sign_bits = vdupq_n_u32(0x8000_0000);
        bits_float(vorrq_u32(
            float_bits(result),
            vbicq_u32(sign_bits, is_less_equal_than_half_pi),
        ))
    }
}

/// Shared degree 7 polynomial for asin/acos, scaled by sqrt(1 - |v|).
#[inline(always)]
unsafe fn asin_acos_kernel(abs_value: Repr) -> Repr {
    let mut result = vfmaq_f32(
        vdupq_n_f32(ASIN_COEFF_6),
        abs_value,
        vdupq_n_f32(ASIN_COEFF_7),
    );
    result = vfmaq_f32(vdupq_n_f32(ASIN_COEFF_5), result, abs_value);
    result = vfmaq_f32(vdupq_n_f32(ASIN_COEFF_4), result, abs_value);
    result = vfmaq_f32(vdupq_n_f32(ASIN_COEFF_3), result, abs_value);
    result = vfmaq_f32(vdupq_n_f32(ASIN_COEFF_2), result, abs_value);
    result = vfmaq_f32(vdupq_n_f32(ASIN_COEFF_1), result, abs_value);
    result = vfmaq_f32(vdupq_n_f32(ASIN_COEFF_0), result, abs_value);

    let scale = vsqrtq_f32(vsubq_f32(vdupq_n_f32(1.0), abs_value));
    vmulq_f32(result, scale)
}

pub(crate) fn asin(input: Repr) -> Repr {
    unsafe {
        let abs_value = vabsq_f32(input);
        let result = asin_acos_kernel(abs_value);

        // If input is positive: pi/2 - result
        // If input is negative: result - pi/2
        // The offset is pi/2 with the sign of the input; the result takes
        // the opposite sign of the input.
        let sign_bits = vdupq_n_u32(0x8000_0000);
        let input_sign = vandq_u32(float_bits(input), sign_bits);
        let offset = bits_float(vorrq_u32(input_sign, float_bits(vdupq_n_f32(HALF_PI))));

        let result = bits_float(veorq_u32(
            float_bits(result),
            veorq_u32(input_sign, sign_bits),
        ));
        vaddq_f32(result, offset)
    }
}

pub(crate) fn acos(input: Repr) -> Repr {
    unsafe {
        // acos(value) = pi/2 - asin(value); with the shared kernel this
        // collapses to the kernel value offset by pi for negative inputs.
        let abs_value = vabsq_f32(input);
        let result = asin_acos_kernel(abs_value);

        // If input is positive: result
        // If input is negative: pi - result
        let is_input_negative = vcltq_f32(input, vdupq_n_f32(0.0));
        let offset = bits_float(vandq_u32(is_input_negative, float_bits(vdupq_n_f32(PI))));

        let sign_bits = vdupq_n_u32(0x8000_0000);
        let input_sign = vandq_u32(float_bits(input), sign_bits);
        let result = bits_float(vorrq_u32(float_bits(result), input_sign));
        vaddq_f32(result, offset)
    }
}

pub(crate) fn atan(input: Repr) -> Repr {
    unsafe {
        let abs_value = vabsq_f32(input);

        // Inputs beyond [-1, 1] remap through atan(v) = pi/2 - atan(1/v)
        let is_larger_than_one = vcgtq_f32(abs_value, vdupq_n_f32(1.0));
        let rcp = reciprocal(abs_value);

        let x = select(is_larger_than_one, rcp, abs_value);

        let x2 = vmulq_f32(x, x);

        let mut result = vfmaq_f32(vdupq_n_f32(ATAN_COEFF_5), x2, vdupq_n_f32(ATAN_COEFF_6));
        result = vfmaq_f32(vdupq_n_f32(ATAN_COEFF_4), result, x2);
        result = vfmaq_f32(vdupq_n_f32(ATAN_COEFF_3), result, x2);
        result = vfmaq_f32(vdupq_n_f32(ATAN_COEFF_2), result, x2);
        result = vfmaq_f32(vdupq_n_f32(ATAN_COEFF_1), result, x2);
        result = vfmaq_f32(vdupq_n_f32(1.0), result, x2);
        result = vmulq_f32(result, x);

        let remapped = vsubq_f32(vdupq_n_f32(ATAN_REMAP_OFFSET), result);
        result = select(is_larger_than_one, remapped, result);

        // Keep the original sign
        let sign_bits = vdupq_n_u32(0x8000_0000);
        bits_float(vorrq_u32(
            float_bits(result),
            vandq_u32(float_bits(input), sign_bits),
        ))
    }
}

pub(crate) fn atan2(y: Repr, x: Repr) -> Repr {
    unsafe {
        // If X == 0.0 and Y != 0.0, we return pi/2 with the sign of Y
        // If X == 0.0 and Y == 0.0, we return 0.0
        // If X > 0.0, we return atan(y/x)
        // If X < 0.0, we return atan(y/x) + sign(Y) * pi
        let zero = vdupq_n_f32(0.0);
        let is_x_zero = vceqq_f32(x, zero);
        let is_y_zero = vceqq_f32(y, zero);
        let inputs_are_zero = vandq_u32(is_x_zero, is_y_zero);

        let is_x_positive = vcgtq_f32(x, zero);

        let sign_bits = vdupq_n_u32(0x8000_0000);
        let y_sign = vandq_u32(float_bits(y), sign_bits);

        // If X == 0.0, our offset is pi/2 otherwise it is pi, both with the
        // sign of Y
        let offset = select(is_x_zero, vdupq_n_f32(HALF_PI), vdupq_n_f32(PI));
        let mut offset = vorrq_u32(float_bits(offset), y_sign);

        // If X > 0.0, our offset is 0.0
        offset = vbicq_u32(offset, is_x_positive);

        // If X == 0.0 and Y == 0.0, our offset is 0.0
        offset = vbicq_u32(offset, inputs_are_zero);

        let value = atan(vdivq_f32(y, x));

        // If X == 0.0, our value is 0.0 otherwise it is atan(y/x)
        let mut value = vbicq_u32(float_bits(value), is_x_zero);

        // If X == 0.0 and Y == 0.0, our value is 0.0
        value = vbicq_u32(value, inputs_are_zero);

        vaddq_f32(bits_float(value), bits_float(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::neon::{new, splat, store};

    fn lanes(input: Repr) -> [f32; 4] {
        let mut output = [0.0; 4];
        store(input, &mut output);
        output
    }

    #[test]
    fn round_symmetric_rounds_half_away_from_zero() {
        let out = lanes(round_symmetric(new(1.5, -1.5, 1.2, -1.2)));
        assert_eq!(out, [2.0, -2.0, 1.0, -1.0]);
    }

    #[test]
    fn round_bankers_rounds_half_to_even() {
        let out = lanes(round_bankers(new(2.5, 1.5, -2.5, -1.5)));
        assert_eq!(out, [2.0, 2.0, -2.0, -2.0]);
    }

    #[test]
    fn rounding_preserves_specials() {
        let specials = new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, FRACTIONAL_LIMIT);
        for rounded in [
            lanes(round_symmetric(specials)),
            lanes(round_bankers(specials)),
            lanes(floor(specials)),
            lanes(ceil(specials)),
        ] {
            assert!(rounded[0].is_nan());
            assert_eq!(rounded[1], f32::INFINITY);
            assert_eq!(rounded[2], f32::NEG_INFINITY);
            assert_eq!(rounded[3], FRACTIONAL_LIMIT);
        }

        let odd = new(8_388_609.0, -8_388_609.0, 8_388_611.0, -8_388_611.0);
        assert_eq!(lanes(round_symmetric(odd)), lanes(odd));
        assert_eq!(lanes(round_bankers(odd)), lanes(odd));
    }

    #[test]
    fn sin_cos_agree_with_std() {
        let mut angle = -12.0f32;
        while angle <= 12.0 {
            let v = splat(angle);
            assert!((lanes(sin(v))[0] - angle.sin()).abs() < 1e-5, "sin({angle})");
            assert!((lanes(cos(v))[2] - angle.cos()).abs() < 1e-5, "cos({angle})");
            angle += 0.043;
        }
    }

    #[test]
    fn atan2_quadrants() {
        let y = new(0.0, 1.0, -1.0, 0.0);
        let x = new(0.0, 0.0, 0.0, -1.0);
        let out = lanes(atan2(y, x));
        assert_eq!(out[0], 0.0);
        assert!((out[1] - HALF_PI).abs() < 1e-6);
        assert!((out[2] + HALF_PI).abs() < 1e-6);
        assert!((out[3] - PI).abs() < 1e-6);
    }
}
