//! Per-axis clamp math.
//!
//! The elastic clamp is a rational soft clamp: overshoot past a bound is
//! compressed hyperbolically so the result approaches `bound ± margin` but
//! never reaches it. Resistance grows the further the raw value strays.

#[cfg(test)]
#[path = "clamp_test.rs"]
mod clamp_test;

use crate::consts::SETTLE_FACTOR;

/// Compressed overshoot: `overshoot * margin / (overshoot + margin)`.
///
/// Returns 0 for a non-positive margin (the clamp becomes hard), `margin`
/// for an infinite overshoot, and the overshoot itself for an infinite margin.
#[must_use]
pub fn elastic_offset(overshoot: f64, margin: f64) -> f64 {
    if margin <= 0.0 || overshoot <= 0.0 {
        return 0.0;
    }
    if overshoot.is_infinite() {
        return margin;
    }
    if margin.is_infinite() {
        return overshoot;
    }
    overshoot * margin / (overshoot + margin)
}

/// Soft-clamp `x` into `[min, max]` with elasticity radius `margin`.
#[must_use]
pub fn elastic_clamp(x: f64, min: f64, max: f64, margin: f64) -> f64 {
    if x < min {
        return min - elastic_offset(min - x, margin);
    }
    if x > max {
        return max + elastic_offset(x - max, margin);
    }
    x
}

/// Hard-clamp `x` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics on inverted bounds; `min` wins.
#[must_use]
pub fn hard_clamp(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// One spring-back step toward the violated bound.
///
/// Returns `None` when `x` is already inside `[min, max]`.
#[must_use]
pub fn settle_toward(x: f64, min: f64, max: f64) -> Option<f64> {
    if x < min {
        Some(x + (min - x) * SETTLE_FACTOR)
    } else if x > max {
        Some(x + (max - x) * SETTLE_FACTOR)
    } else {
        None
    }
}
