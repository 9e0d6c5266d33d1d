//! Rounding and transcendental kernels for the SSE4.1 backend.
//!
//! The trigonometric functions evaluate the shared minimax polynomials
//! after explicit range reduction; see `simd::polynomials` for the
//! coefficient provenance.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::simd::polynomials::*;
use crate::simd::sse::{reciprocal, select, Repr};

#[inline(always)]
pub(crate) fn floor(input: Repr) -> Repr {
    unsafe { _mm_floor_ps(input) }
}

#[inline(always)]
pub(crate) fn ceil(input: Repr) -> Repr {
    unsafe { _mm_ceil_ps(input) }
}

/// Rounds half to even. The rounding instruction leaves NaN, ±inf, and
/// values with no fractional part unchanged.
#[inline(always)]
pub(crate) fn round_bankers(input: Repr) -> Repr {
    unsafe { _mm_round_ps(input, _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC) }
}

/// Rounds half away from zero. NaN, ±inf, and |input| >= 2^23 are returned
/// unchanged: such lanes have no fractional part and the 0.5 bias below
/// would otherwise push odd values just past the limit onto a neighbor.
#[inline(always)]
pub(crate) fn round_symmetric(input: Repr) -> Repr {
    unsafe {
        let sign_mask = _mm_set1_ps(-0.0);
        let sign = _mm_and_ps(input, sign_mask);

        let abs_input = _mm_andnot_ps(sign_mask, input);
        let is_large = _mm_cmpge_ps(abs_input, _mm_set1_ps(FRACTIONAL_LIMIT));
        let is_nan = _mm_cmpneq_ps(input, input);
        let is_unchanged = _mm_or_ps(is_large, is_nan);

        // For positive values, we add a bias of 0.5.
        // For negative values, we add a bias of -0.5.
        let bias = _mm_or_ps(sign, _mm_set1_ps(0.5));
        let biased_input = _mm_add_ps(input, bias);

        let floored = _mm_floor_ps(biased_input);
        let ceiled = _mm_ceil_ps(biased_input);
        let is_positive = _mm_cmpge_ps(input, _mm_setzero_ps());

        select(is_unchanged, input, select(is_positive, floored, ceiled))
    }
}

/// Remaps the angle into [-π/2, π/2]; also returns the mask of lanes that
/// did not need reflecting about ±π/2.
#[inline(always)]
unsafe fn reduce_half_pi(angle: Repr) -> (Repr, Repr) {
    // Remap our input in the [-pi, pi] range
    let mut quotient = _mm_mul_ps(angle, _mm_set1_ps(1.0 / TWO_PI));
    quotient = round_bankers(quotient);
    quotient = _mm_mul_ps(quotient, _mm_set1_ps(TWO_PI));
    let x = _mm_sub_ps(angle, quotient);

    // Remap our input in the [-pi/2, pi/2] range
    let sign_mask = _mm_set1_ps(-0.0);
    let sign = _mm_and_ps(x, sign_mask);
    let reference = _mm_or_ps(sign, _mm_set1_ps(PI));

    let reflection = _mm_sub_ps(reference, x);
    let x_abs = _mm_andnot_ps(sign_mask, x);

    let is_less_equal_than_half_pi = _mm_cmple_ps(x_abs, _mm_set1_ps(HALF_PI));

    (
        select(is_less_equal_than_half_pi, x, reflection),
        is_less_equal_than_half_pi,
    )
}

pub(crate) fn sin(angle: Repr) -> Repr {
    unsafe {
        let (x, _) = reduce_half_pi(angle);

        let x2 = _mm_mul_ps(x, x);
        let mut result = _mm_add_ps(
            _mm_mul_ps(x2, _mm_set1_ps(SIN_COEFF_5)),
            _mm_set1_ps(SIN_COEFF_4),
        );
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(SIN_COEFF_3));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(SIN_COEFF_2));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(SIN_COEFF_1));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(1.0));
        _mm_mul_ps(result, x)
    }
}

pub(crate) fn cos(angle: Repr) -> Repr {
    unsafe {
        let (x, is_less_equal_than_half_pi) = reduce_half_pi(angle);

        let x2 = _mm_mul_ps(x, x);
        let mut result = _mm_add_ps(
            _mm_mul_ps(x2, _mm_set1_ps(COS_COEFF_5)),
            _mm_set1_ps(COS_COEFF_4),
        );
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(COS_COEFF_3));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(COS_COEFF_2));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(COS_COEFF_1));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(1.0));

        // Reflected lanes flip sign
        let sign_mask = _mm_set1_ps(-0.0);
        _mm_or_ps(result, _mm_andnot_ps(is_less_equal_than_half_pi, sign_mask))
    }
}

/// Shared degree 7 polynomial for asin/acos, scaled by sqrt(1 - |v|).
#[inline(always)]
unsafe fn asin_acos_kernel(abs_value: Repr) -> Repr {
    let mut result = _mm_add_ps(
        _mm_mul_ps(abs_value, _mm_set1_ps(ASIN_COEFF_7)),
        _mm_set1_ps(ASIN_COEFF_6),
    );
    result = _mm_add_ps(_mm_mul_ps(result, abs_value), _mm_set1_ps(ASIN_COEFF_5));
    result = _mm_add_ps(_mm_mul_ps(result, abs_value), _mm_set1_ps(ASIN_COEFF_4));
    result = _mm_add_ps(_mm_mul_ps(result, abs_value), _mm_set1_ps(ASIN_COEFF_3));
    result = _mm_add_ps(_mm_mul_ps(result, abs_value), _mm_set1_ps(ASIN_COEFF_2));
    result = _mm_add_ps(_mm_mul_ps(result, abs_value), _mm_set1_ps(ASIN_COEFF_1));
    result = _mm_add_ps(_mm_mul_ps(result, abs_value), _mm_set1_ps(ASIN_COEFF_0));

    let scale = _mm_sqrt_ps(_mm_sub_ps(_mm_set1_ps(1.0), abs_value));
    _mm_mul_ps(result, scale)
}

pub(crate) fn asin(input: Repr) -> Repr {
    unsafe {
        let sign_bit = _mm_set1_ps(-0.0);
        let abs_value = _mm_andnot_ps(sign_bit, input);

        let result = asin_acos_kernel(abs_value);

        // If input is positive: pi/2 - result
        // If input is negative: result - pi/2
        // The offset is pi/2 with the sign of the input; the result takes
        // the opposite sign of the input.
        let input_sign = _mm_and_ps(input, sign_bit);
        let offset = _mm_or_ps(input_sign, _mm_set1_ps(HALF_PI));

        let result = _mm_xor_ps(result, _mm_xor_ps(input_sign, sign_bit));
        _mm_add_ps(result, offset)
    }
}

pub(crate) fn acos(input: Repr) -> Repr {
    unsafe {
        // acos(value) = pi/2 - asin(value); with the shared kernel this
        // collapses to the kernel value offset by pi for negative inputs.
        let sign_bit = _mm_set1_ps(-0.0);
        let abs_value = _mm_andnot_ps(sign_bit, input);

        let result = asin_acos_kernel(abs_value);

        // If input is positive: result
        // If input is negative: pi - result
        let is_input_negative = _mm_cmplt_ps(input, _mm_setzero_ps());
        let offset = _mm_and_ps(is_input_negative, _mm_set1_ps(PI));

        let input_sign = _mm_and_ps(input, sign_bit);
        let result = _mm_or_ps(result, input_sign);
        _mm_add_ps(result, offset)
    }
}

pub(crate) fn atan(input: Repr) -> Repr {
    unsafe {
        let sign_bit = _mm_set1_ps(-0.0);
        let abs_value = _mm_andnot_ps(sign_bit, input);

        // Inputs beyond [-1, 1] remap through atan(v) = pi/2 - atan(1/v)
        let is_larger_than_one = _mm_cmpgt_ps(abs_value, _mm_set1_ps(1.0));
        let rcp = reciprocal(abs_value);

        let x = select(is_larger_than_one, rcp, abs_value);

        let x2 = _mm_mul_ps(x, x);

        let mut result = _mm_add_ps(
            _mm_mul_ps(x2, _mm_set1_ps(ATAN_COEFF_6)),
            _mm_set1_ps(ATAN_COEFF_5),
        );
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(ATAN_COEFF_4));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(ATAN_COEFF_3));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(ATAN_COEFF_2));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(ATAN_COEFF_1));
        result = _mm_add_ps(_mm_mul_ps(result, x2), _mm_set1_ps(1.0));
        result = _mm_mul_ps(result, x);

        let remapped = _mm_sub_ps(_mm_set1_ps(ATAN_REMAP_OFFSET), result);
        result = select(is_larger_than_one, remapped, result);

        // Keep the original sign
        _mm_or_ps(result, _mm_and_ps(input, sign_bit))
    }
}

pub(crate) fn atan2(y: Repr, x: Repr) -> Repr {
    unsafe {
        // If X == 0.0 and Y != 0.0, we return pi/2 with the sign of Y
        // If X == 0.0 and Y == 0.0, we return 0.0
        // If X > 0.0, we return atan(y/x)
        // If X < 0.0, we return atan(y/x) + sign(Y) * pi
        let zero = _mm_setzero_ps();
        let is_x_zero = _mm_cmpeq_ps(x, zero);
        let is_y_zero = _mm_cmpeq_ps(y, zero);
        let inputs_are_zero = _mm_and_ps(is_x_zero, is_y_zero);

        let is_x_positive = _mm_cmpgt_ps(x, zero);

        let sign_mask = _mm_set1_ps(-0.0);
        let y_sign = _mm_and_ps(y, sign_mask);

        // If X == 0.0, our offset is pi/2 otherwise it is pi, both with the
        // sign of Y
        let half_pi = _mm_set1_ps(HALF_PI);
        let pi = _mm_set1_ps(PI);
        let mut offset = _mm_or_ps(
            _mm_and_ps(is_x_zero, half_pi),
            _mm_andnot_ps(is_x_zero, pi),
        );
        offset = _mm_or_ps(offset, y_sign);

        // If X > 0.0, our offset is 0.0
        offset = _mm_andnot_ps(is_x_positive, offset);

        // If X == 0.0 and Y == 0.0, our offset is 0.0
        offset = _mm_andnot_ps(inputs_are_zero, offset);

        let angle = _mm_div_ps(y, x);
        let mut value = atan(angle);

        // If X == 0.0, our value is 0.0 otherwise it is atan(y/x)
        value = _mm_andnot_ps(is_x_zero, value);

        // If X == 0.0 and Y == 0.0, our value is 0.0
        value = _mm_andnot_ps(inputs_are_zero, value);

        _mm_add_ps(value, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::sse::{new, splat, store};

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

        // Odd values just past 2^23 would be shifted by the half bias if
        // the guard were missing.
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
