//! Rounding semantics: half-away-from-zero vs half-to-even, and the
//! pass-through contract for specials.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simd4f::*;

fn lanes(v: Vector4) -> [f32; 4] {
    let mut out = [0.0; 4];
    vector_store(v, &mut out);
    out
}

#[test]
fn symmetric_rounds_halves_away_from_zero() {
    let input = vector_set(0.5, 1.5, -0.5, -1.5);
    assert_eq!(lanes(vector_round_symmetric(input)), [1.0, 2.0, -1.0, -2.0]);

    let input = vector_set(2.5, -2.5, 0.49, -0.49);
    assert_eq!(lanes(vector_round_symmetric(input)), [3.0, -3.0, 0.0, -0.0]);
}

#[test]
fn bankers_rounds_halves_to_even() {
    let input = vector_set(0.5, 1.5, 2.5, 3.5);
    assert_eq!(lanes(vector_round_bankers(input)), [0.0, 2.0, 2.0, 4.0]);

    let input = vector_set(-0.5, -1.5, -2.5, -3.5);
    assert_eq!(lanes(vector_round_bankers(input)), [-0.0, -2.0, -2.0, -4.0]);
}

#[test]
fn both_agree_away_from_halves() {
    let mut rng = StdRng::seed_from_u64(0xF00D);
    for _ in 0..1_000 {
        let value: f32 = rng.random_range(-10_000.0..10_000.0);
        // Skip values close enough to a half for the two rules to differ.
        if (value.fract().abs() - 0.5).abs() < 1e-3 {
            continue;
        }
        let v = vector_broadcast(value);
        let sym = lanes(vector_round_symmetric(v))[0];
        let bank = lanes(vector_round_bankers(v))[0];
        assert_eq!(sym, bank, "value {value}");
        assert_eq!(sym, value.round(), "value {value}");
    }
}

#[test]
fn specials_pass_through_unchanged() {
    let limit = 8_388_608.0_f32; // 2^23: no fractional bits remain
    let input = vector_set(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, limit);

    for round in [vector_round_symmetric, vector_round_bankers] {
        let out = lanes(round(input));
        assert!(out[0].is_nan());
        assert_eq!(out[1], f32::INFINITY);
        assert_eq!(out[2], f32::NEG_INFINITY);
        assert_eq!(out[3], limit);
    }

    let big = vector_set(limit * 2.0, -limit, 16_777_217.0, -33_554_430.0);
    let expected = lanes(big);
    assert_eq!(lanes(vector_round_symmetric(big)), expected);
    assert_eq!(lanes(vector_round_bankers(big)), expected);

    // Odd values just past 2^23 are the ones a naive half-bias would move.
    let odd = vector_set(8_388_609.0, -8_388_609.0, 8_388_611.0, -8_388_611.0);
    let expected = lanes(odd);
    assert_eq!(lanes(vector_round_symmetric(odd)), expected);
    assert_eq!(lanes(vector_round_bankers(odd)), expected);
}

#[test]
fn floor_and_ceil_bracket_the_input() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..1_000 {
        let value: f32 = rng.random_range(-10_000.0..10_000.0);
        let v = vector_broadcast(value);
        assert_eq!(lanes(vector_floor(v))[0], value.floor(), "value {value}");
        assert_eq!(lanes(vector_ceil(v))[0], value.ceil(), "value {value}");
    }

    let input = vector_set(-0.5, 0.5, -2.0, 2.0);
    assert_eq!(lanes(vector_floor(input)), [-1.0, 0.0, -2.0, 2.0]);
    assert_eq!(lanes(vector_ceil(input)), [-0.0, 1.0, -2.0, 2.0]);
}

#[test]
fn fraction_is_consistent_with_floor() {
    let mut rng = StdRng::seed_from_u64(22);
    for _ in 0..500 {
        let value: f32 = rng.random_range(-1_000.0..1_000.0);
        let out = lanes(vector_fraction(vector_broadcast(value)))[0];
        assert_eq!(out, value - value.floor(), "value {value}");
        assert!((0.0..=1.0).contains(&out));
    }
}
