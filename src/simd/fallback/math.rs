//! Rounding and trigonometric kernels for the portable backend.
//!
//! Each kernel applies the shared scalar implementation lane by lane, so
//! approximation error matches the SIMD backends bit for bit.

use super::{map, zip, Repr};
use crate::scalar;

#[inline(always)]
pub(crate) fn floor(input: Repr) -> Repr {
    map(input, f32::floor)
}

#[inline(always)]
pub(crate) fn ceil(input: Repr) -> Repr {
    map(input, f32::ceil)
}

#[inline(always)]
pub(crate) fn round_bankers(input: Repr) -> Repr {
    map(input, scalar::round_bankers)
}

#[inline(always)]
pub(crate) fn round_symmetric(input: Repr) -> Repr {
    map(input, scalar::round_symmetric)
}

#[inline(always)]
pub(crate) fn sin(angle: Repr) -> Repr {
    map(angle, scalar::sin)
}

#[inline(always)]
pub(crate) fn cos(angle: Repr) -> Repr {
    map(angle, scalar::cos)
}

#[inline(always)]
pub(crate) fn asin(input: Repr) -> Repr {
    map(input, scalar::asin)
}

#[inline(always)]
pub(crate) fn acos(input: Repr) -> Repr {
    map(input, scalar::acos)
}

#[inline(always)]
pub(crate) fn atan(input: Repr) -> Repr {
    map(input, scalar::atan)
}

#[inline(always)]
pub(crate) fn atan2(y: Repr, x: Repr) -> Repr {
    zip(y, x, scalar::atan2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::fallback::{new, store};

    fn lanes(input: Repr) -> [f32; 4] {
        let mut out = [0.0; 4];
        store(input, &mut out);
        out
    }

    #[test]
    fn rounding_leaves_large_magnitudes_untouched() {
        let big = 16_777_216.5_f32;
        let out = lanes(round_symmetric(new(big, -big, f32::INFINITY, f32::NAN)));
        assert_eq!(out[0], big);
        assert_eq!(out[1], -big);
        assert_eq!(out[2], f32::INFINITY);
        assert!(out[3].is_nan());
    }

    #[test]
    fn sin_matches_reference_over_period() {
        for step in -64..=64 {
            let angle = step as f32 * 0.1;
            let out = lanes(sin(new(angle, angle, angle, angle)));
            assert!((out[0] - angle.sin()).abs() < 1e-5, "angle {angle}");
        }
    }
}
