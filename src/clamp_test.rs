#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// elastic_offset
// =============================================================

#[test]
fn elastic_offset_zero_overshoot_is_zero() {
    assert_eq!(elastic_offset(0.0, 20.0), 0.0);
}

#[test]
fn elastic_offset_equal_to_margin_is_half_margin() {
    assert!(approx_eq(elastic_offset(20.0, 20.0), 10.0));
}

#[test]
fn elastic_offset_stays_below_margin() {
    for overshoot in [1.0, 10.0, 100.0, 1_000.0, 100_000.0] {
        let offset = elastic_offset(overshoot, 20.0);
        assert!(offset > 0.0);
        assert!(offset < 20.0, "offset {offset} for overshoot {overshoot}");
    }
}

#[test]
fn elastic_offset_grows_with_overshoot() {
    let mut prev = 0.0;
    for overshoot in [1.0, 2.0, 5.0, 10.0, 50.0] {
        let offset = elastic_offset(overshoot, 20.0);
        assert!(offset > prev);
        prev = offset;
    }
}

#[test]
fn elastic_offset_infinite_overshoot_is_margin() {
    assert_eq!(elastic_offset(f64::INFINITY, 20.0), 20.0);
}

#[test]
fn elastic_offset_infinite_margin_passes_overshoot_through() {
    assert_eq!(elastic_offset(10.0, f64::INFINITY), 10.0);
}

#[test]
fn elastic_offset_non_positive_margin_is_hard() {
    assert_eq!(elastic_offset(10.0, 0.0), 0.0);
    assert_eq!(elastic_offset(10.0, -5.0), 0.0);
}

// =============================================================
// elastic_clamp
// =============================================================

#[test]
fn elastic_clamp_identity_inside_range() {
    for x in [0.0, 0.5, 50.0, 99.9, 100.0] {
        assert_eq!(elastic_clamp(x, 0.0, 100.0, 20.0), x);
    }
}

#[test]
fn elastic_clamp_below_min() {
    // 0 - 20*10/(10+20)
    assert!(approx_eq(elastic_clamp(-10.0, 0.0, 100.0, 20.0), -20.0 / 3.0));
}

#[test]
fn elastic_clamp_above_max() {
    // 100 + 20*30/(30+20)
    assert!(approx_eq(elastic_clamp(130.0, 0.0, 100.0, 20.0), 112.0));
}

#[test]
fn elastic_clamp_is_continuous_at_bounds() {
    let just_below = elastic_clamp(-1e-9, 0.0, 100.0, 20.0);
    let just_above = elastic_clamp(100.0 + 1e-9, 0.0, 100.0, 20.0);
    assert!(approx_eq(just_below, 0.0));
    assert!(approx_eq(just_above, 100.0));
}

#[test]
fn elastic_clamp_zero_margin_is_hard_clamp() {
    assert_eq!(elastic_clamp(-50.0, 0.0, 100.0, 0.0), 0.0);
    assert_eq!(elastic_clamp(150.0, 0.0, 100.0, 0.0), 100.0);
}

#[test]
fn elastic_clamp_unbounded_is_identity() {
    assert_eq!(elastic_clamp(-1e12, f64::NEG_INFINITY, f64::INFINITY, 20.0), -1e12);
}

// =============================================================
// hard_clamp
// =============================================================

#[test]
fn hard_clamp_pins_to_edges() {
    assert_eq!(hard_clamp(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(hard_clamp(15.0, 0.0, 10.0), 10.0);
    assert_eq!(hard_clamp(5.0, 0.0, 10.0), 5.0);
}

#[test]
fn hard_clamp_inverted_bounds_prefers_min() {
    assert_eq!(hard_clamp(5.0, 10.0, 0.0), 10.0);
}

// =============================================================
// settle_toward
// =============================================================

#[test]
fn settle_toward_inside_is_none() {
    assert_eq!(settle_toward(50.0, 0.0, 100.0), None);
    assert_eq!(settle_toward(0.0, 0.0, 100.0), None);
}

#[test]
fn settle_toward_recovers_a_fifth_of_overshoot() {
    let below = settle_toward(-10.0, 0.0, 100.0).unwrap();
    assert!(approx_eq(below, -8.0));
    let above = settle_toward(110.0, 0.0, 100.0).unwrap();
    assert!(approx_eq(above, 108.0));
}

#[test]
fn settle_toward_never_overshoots() {
    let mut x = -20.0;
    while let Some(next) = settle_toward(x, 0.0, 100.0) {
        assert!(next > x);
        assert!(next < 0.0);
        x = next;
        if x > -1e-6 {
            break;
        }
    }
}
