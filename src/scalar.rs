//! Per-lane f32 kernels.
//!
//! The portable fallback backend applies these to each lane; they evaluate
//! the same shared polynomials as the SIMD backends so every backend agrees
//! within evaluation-order noise.

use crate::simd::polynomials::*;

/// Rounds half away from zero. NaN, ±inf, and |value| >= 2^23 are returned
/// unchanged since they have no fractional part.
#[inline]
pub(crate) fn round_symmetric(value: f32) -> f32 {
    if !value.is_finite() || value.abs() >= FRACTIONAL_LIMIT {
        return value;
    }

    if value >= 0.0 {
        (value + 0.5).floor()
    } else {
        (value - 0.5).ceil()
    }
}

/// Rounds half to even, with the same specials contract as
/// [`round_symmetric`].
#[inline]
pub(crate) fn round_bankers(value: f32) -> f32 {
    if !value.is_finite() || value.abs() >= FRACTIONAL_LIMIT {
        return value;
    }

    value.round_ties_even()
}

#[inline]
pub(crate) fn is_finite(value: f32) -> bool {
    value.is_finite()
}

#[inline]
pub(crate) fn select(mask: u32, if_true: f32, if_false: f32) -> f32 {
    if mask != 0 {
        if_true
    } else {
        if_false
    }
}

/// Reduces the angle to [-π/2, π/2], reflecting about ±π/2.
///
/// Returns the reduced argument and whether a reflection took place.
#[inline]
fn reduce_half_pi(angle: f32) -> (f32, bool) {
    // Remap into [-pi, pi]
    let quotient = round_bankers(angle * (1.0 / TWO_PI));
    let x = angle - quotient * TWO_PI;

    // Remap into [-pi/2, pi/2]
    if x.abs() <= HALF_PI {
        (x, false)
    } else {
        (f32::copysign(PI, x) - x, true)
    }
}

pub(crate) fn sin(angle: f32) -> f32 {
    let (x, _) = reduce_half_pi(angle);

    let x2 = x * x;
    let mut result = (x2 * SIN_COEFF_5) + SIN_COEFF_4;
    result = (result * x2) + SIN_COEFF_3;
    result = (result * x2) + SIN_COEFF_2;
    result = (result * x2) + SIN_COEFF_1;
    result = (result * x2) + 1.0;
    result * x
}

pub(crate) fn cos(angle: f32) -> f32 {
    let (x, reflected) = reduce_half_pi(angle);

    let x2 = x * x;
    let mut result = (x2 * COS_COEFF_5) + COS_COEFF_4;
    result = (result * x2) + COS_COEFF_3;
    result = (result * x2) + COS_COEFF_2;
    result = (result * x2) + COS_COEFF_1;
    result = (result * x2) + 1.0;

    if reflected {
        -result
    } else {
        result
    }
}

/// Shared degree 7 polynomial for asin/acos, scaled by sqrt(1 - |v|).
#[inline]
fn asin_acos_kernel(abs_value: f32) -> f32 {
    let mut result = (abs_value * ASIN_COEFF_7) + ASIN_COEFF_6;
    result = (result * abs_value) + ASIN_COEFF_5;
    result = (result * abs_value) + ASIN_COEFF_4;
    result = (result * abs_value) + ASIN_COEFF_3;
    result = (result * abs_value) + ASIN_COEFF_2;
    result = (result * abs_value) + ASIN_COEFF_1;
    result = (result * abs_value) + ASIN_COEFF_0;

    result * (1.0 - abs_value).sqrt()
}

pub(crate) fn asin(value: f32) -> f32 {
    let result = asin_acos_kernel(value.abs());

    // Positive: pi/2 - result, negative: result - pi/2
    if value >= 0.0 {
        HALF_PI - result
    } else {
        result - HALF_PI
    }
}

pub(crate) fn acos(value: f32) -> f32 {
    let result = asin_acos_kernel(value.abs());

    // Positive: result, negative: pi - result
    if value >= 0.0 {
        result
    } else {
        PI - result
    }
}

pub(crate) fn atan(value: f32) -> f32 {
    let abs_value = value.abs();

    // Inputs beyond [-1, 1] remap through atan(v) = pi/2 - atan(1/v)
    let is_larger_than_one = abs_value > 1.0;
    let x = if is_larger_than_one {
        1.0 / abs_value
    } else {
        abs_value
    };

    let x2 = x * x;
    let mut result = (x2 * ATAN_COEFF_6) + ATAN_COEFF_5;
    result = (result * x2) + ATAN_COEFF_4;
    result = (result * x2) + ATAN_COEFF_3;
    result = (result * x2) + ATAN_COEFF_2;
    result = (result * x2) + ATAN_COEFF_1;
    result = (result * x2) + 1.0;
    result *= x;

    if is_larger_than_one {
        result = ATAN_REMAP_OFFSET - result;
    }

    f32::copysign(result, value)
}

pub(crate) fn atan2(y: f32, x: f32) -> f32 {
    // Quadrant rules match the packed implementations:
    //   x == 0, y == 0 -> 0
    //   x == 0, y != 0 -> pi/2 with the sign of y
    //   x > 0          -> atan(y/x)
    //   x < 0          -> atan(y/x) + pi with the sign of y
    if x == 0.0 {
        if y == 0.0 {
            return 0.0;
        }

        return f32::copysign(HALF_PI, y);
    }

    let value = atan(y / x);
    if x > 0.0 {
        value
    } else {
        value + f32::copysign(PI, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_symmetric_halfway_cases() {
        assert_eq!(round_symmetric(1.5), 2.0);
        assert_eq!(round_symmetric(1.2), 1.0);
        assert_eq!(round_symmetric(-1.5), -2.0);
        assert_eq!(round_symmetric(-1.2), -1.0);
        assert_eq!(round_symmetric(0.5), 1.0);
        assert_eq!(round_symmetric(-0.5), -1.0);
    }

    #[test]
    fn round_bankers_halfway_cases() {
        assert_eq!(round_bankers(2.5), 2.0);
        assert_eq!(round_bankers(1.5), 2.0);
        assert_eq!(round_bankers(-2.5), -2.0);
        assert_eq!(round_bankers(-1.5), -2.0);
    }

    #[test]
    fn rounding_preserves_specials() {
        assert!(round_symmetric(f32::NAN).is_nan());
        assert!(round_bankers(f32::NAN).is_nan());
        assert_eq!(round_symmetric(f32::INFINITY), f32::INFINITY);
        assert_eq!(round_bankers(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert_eq!(round_symmetric(FRACTIONAL_LIMIT), FRACTIONAL_LIMIT);
        assert_eq!(round_bankers(-FRACTIONAL_LIMIT), -FRACTIONAL_LIMIT);
    }

    #[test]
    fn trig_matches_std_on_primary_domain() {
        let mut angle = -10.0f32;
        while angle <= 10.0 {
            assert!((sin(angle) - angle.sin()).abs() < 1e-5, "sin({angle})");
            assert!((cos(angle) - angle.cos()).abs() < 1e-5, "cos({angle})");
            angle += 0.037;
        }
    }

    #[test]
    fn inverse_trig_matches_std() {
        let mut value = -1.0f32;
        while value <= 1.0 {
            assert!((asin(value) - value.asin()).abs() < 1e-4, "asin({value})");
            assert!((acos(value) - value.acos()).abs() < 1e-4, "acos({value})");
            value += 0.01;
        }

        let mut value = -8.0f32;
        while value <= 8.0 {
            assert!((atan(value) - value.atan()).abs() < 1e-4, "atan({value})");
            value += 0.031;
        }
    }

    #[test]
    fn atan2_quadrant_rules() {
        assert_eq!(atan2(0.0, 0.0), 0.0);
        assert_eq!(atan2(1.0, 0.0), HALF_PI);
        assert_eq!(atan2(-1.0, 0.0), -HALF_PI);
        assert!((atan2(0.0, -1.0) - PI).abs() < 1e-6);
        assert!((atan2(1.0, 1.0) - std::f32::consts::FRAC_PI_4).abs() < 1e-4);
    }
}
