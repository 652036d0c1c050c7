#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A 2D value, used for positions, velocities and per-axis margins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same value on both axes.
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Multiply both axes by the same factor.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Axis-aligned rectangle the display position is held within.
///
/// Each edge defaults to infinity, so an unconfigured rectangle never
/// constrains anything. `min <= max` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl Bounds {
    pub const UNBOUNDED: Self = Self {
        min_x: f64::NEG_INFINITY,
        min_y: f64::NEG_INFINITY,
        max_x: f64::INFINITY,
        max_y: f64::INFINITY,
    };

    /// The degenerate rectangle at the origin left behind by a full reset.
    pub const ZERO: Self = Self { min_x: 0.0, min_y: 0.0, max_x: 0.0, max_y: 0.0 };

    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Per-axis distance from `p` to the rectangle; zero on axes where `p`
    /// is inside.
    #[must_use]
    pub fn overshoot(&self, p: Vec2) -> Vec2 {
        let axis = |v: f64, min: f64, max: f64| {
            if v < min {
                min - v
            } else if v > max {
                v - max
            } else {
                0.0
            }
        };
        Vec2::new(axis(p.x, self.min_x, self.max_x), axis(p.y, self.min_y, self.max_y))
    }
}
