//! Precision tests for the polynomial trigonometric kernels against `std`
//! scalar math. Tolerances reflect the minimax approximation error plus the
//! f32 range reduction, not backend differences: all backends evaluate the
//! same coefficients.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simd4f::*;

const PI: f32 = std::f32::consts::PI;
const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;

fn lanes(v: Vector4) -> [f32; 4] {
    let mut out = [0.0; 4];
    vector_store(v, &mut out);
    out
}

#[test]
fn sin_and_cos_track_std_over_many_periods() {
    let mut rng = StdRng::seed_from_u64(0x517);
    for _ in 0..4_000 {
        let angle: f32 = rng.random_range(-100.0..100.0);
        let v = vector_broadcast(angle);
        let sin = lanes(vector_sin(v))[0];
        let cos = lanes(vector_cos(v))[0];
        assert!((sin - angle.sin()).abs() < 5e-5, "sin({angle}): {sin}");
        assert!((cos - angle.cos()).abs() < 5e-5, "cos({angle}): {cos}");
    }
}

#[test]
fn sin_squared_plus_cos_squared_is_one() {
    let mut rng = StdRng::seed_from_u64(0xC05);
    for _ in 0..4_000 {
        let angle: f32 = rng.random_range(-100.0..100.0);
        let v = vector_broadcast(angle);
        let sin = lanes(vector_sin(v))[0];
        let cos = lanes(vector_cos(v))[0];
        let identity = sin * sin + cos * cos;
        assert!((identity - 1.0).abs() < 1e-6, "angle {angle}: {identity}");
    }
}

#[test]
fn sin_and_cos_hit_the_quadrant_boundaries() {
    let cases: [(f32, f32, f32); 5] = [
        (0.0, 0.0, 1.0),
        (HALF_PI, 1.0, 0.0),
        (PI, 0.0, -1.0),
        (-HALF_PI, -1.0, 0.0),
        (-PI, 0.0, -1.0),
    ];
    for (angle, expected_sin, expected_cos) in cases {
        let v = vector_broadcast(angle);
        assert!((lanes(vector_sin(v))[0] - expected_sin).abs() < 1e-6, "sin({angle})");
        assert!((lanes(vector_cos(v))[0] - expected_cos).abs() < 1e-6, "cos({angle})");
    }
}

#[test]
fn tan_matches_std_away_from_poles() {
    let mut rng = StdRng::seed_from_u64(0x7A4);
    for _ in 0..2_000 {
        let angle: f32 = rng.random_range(-1.5..1.5);
        // The relative error blows up near ±π/2 where tan itself does.
        if (angle.abs() - HALF_PI).abs() < 0.05 {
            continue;
        }
        let out = lanes(vector_tan(vector_broadcast(angle)))[0];
        let expected = angle.tan();
        let tolerance = 1e-4 * (1.0 + expected.abs() * expected.abs());
        assert!((out - expected).abs() < tolerance, "tan({angle}): {out} vs {expected}");
    }
}

#[test]
fn asin_acos_cover_the_closed_interval() {
    let mut rng = StdRng::seed_from_u64(0xA51);
    for _ in 0..2_000 {
        let value: f32 = rng.random_range(-1.0..=1.0);
        let v = vector_broadcast(value);
        let asin = lanes(vector_asin(v))[0];
        let acos = lanes(vector_acos(v))[0];
        assert!((asin - value.asin()).abs() < 1e-4, "asin({value}): {asin}");
        assert!((acos - value.acos()).abs() < 1e-4, "acos({value}): {acos}");
        // Complementary angles
        assert!((asin + acos - HALF_PI).abs() < 2e-4, "value {value}");
    }

    assert!((lanes(vector_asin(vector_broadcast(1.0)))[0] - HALF_PI).abs() < 1e-6);
    assert!((lanes(vector_asin(vector_broadcast(-1.0)))[0] + HALF_PI).abs() < 1e-6);
    assert!(lanes(vector_acos(vector_broadcast(1.0)))[0].abs() < 1e-6);
    assert!((lanes(vector_acos(vector_broadcast(-1.0)))[0] - PI).abs() < 1e-6);
}

#[test]
fn atan_matches_std_inside_and_outside_the_unit_interval() {
    let mut rng = StdRng::seed_from_u64(0xA7A);
    for _ in 0..2_000 {
        let value: f32 = rng.random_range(-50.0..50.0);
        let out = lanes(vector_atan(vector_broadcast(value)))[0];
        assert!((out - value.atan()).abs() < 1e-4, "atan({value}): {out}");
    }
}

#[test]
fn atan2_special_cases() {
    let cases: [(f32, f32, f32); 8] = [
        (0.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, -1.0, PI),
        (-0.0, -1.0, -PI),
        (1.0, 0.0, HALF_PI),
        (-1.0, 0.0, -HALF_PI),
        (1.0, 1.0, PI / 4.0),
        (-1.0, -1.0, -3.0 * PI / 4.0),
    ];
    for (y, x, expected) in cases {
        let out = lanes(vector_atan2(vector_broadcast(y), vector_broadcast(x)))[0];
        assert!(
            (out - expected).abs() < 1e-4,
            "atan2({y}, {x}): {out} vs {expected}"
        );
    }
}

#[test]
fn atan2_matches_std_in_all_quadrants() {
    let mut rng = StdRng::seed_from_u64(0xA72);
    for _ in 0..2_000 {
        let y: f32 = rng.random_range(-10.0..10.0);
        let x: f32 = rng.random_range(-10.0..10.0);
        if x.abs() < 1e-3 {
            continue;
        }
        let out = lanes(vector_atan2(vector_broadcast(y), vector_broadcast(x)))[0];
        assert!(
            (out - y.atan2(x)).abs() < 2e-4,
            "atan2({y}, {x}): {out} vs {}",
            y.atan2(x)
        );
    }
}

#[test]
fn trig_operates_per_lane() {
    let angles = vector_set(0.0, HALF_PI, PI, -HALF_PI);
    let sin = lanes(vector_sin(angles));
    let expected = [0.0_f32, 1.0, 0.0, -1.0];
    for (lane, (&got, &want)) in sin.iter().zip(&expected).enumerate() {
        assert!((got - want).abs() < 1e-6, "lane {lane}");
    }
}
