//! Partial-update configuration for [`crate::motion::Motion2D`].
//!
//! Every field is optional. Applying a config only touches the fields that
//! are present, so hosts can adjust a single bound or the inertia without
//! restating the rest. Keys use camelCase on the JSON side (`minX`,
//! `marginY`, ...) to match what UI hosts already send.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MotionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inertia: Option<f64>,
}

impl MotionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config object from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or unknown keys.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_min(mut self, min_x: f64, min_y: f64) -> Self {
        self.min_x = Some(min_x);
        self.min_y = Some(min_y);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max_x: f64, max_y: f64) -> Self {
        self.max_x = Some(max_x);
        self.max_y = Some(max_y);
        self
    }

    #[must_use]
    pub fn with_bounds(self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        self.with_min(min_x, min_y).with_max(max_x, max_y)
    }

    #[must_use]
    pub fn with_margin(mut self, margin_x: f64, margin_y: f64) -> Self {
        self.margin_x = Some(margin_x);
        self.margin_y = Some(margin_y);
        self
    }

    #[must_use]
    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = Some(inertia);
        self
    }

    /// Layer `overrides` on top of `self`; fields present in `overrides` win.
    #[must_use]
    pub fn merged(&self, overrides: &Self) -> Self {
        Self {
            x: overrides.x.or(self.x),
            y: overrides.y.or(self.y),
            min_x: overrides.min_x.or(self.min_x),
            min_y: overrides.min_y.or(self.min_y),
            max_x: overrides.max_x.or(self.max_x),
            max_y: overrides.max_y.or(self.max_y),
            margin_x: overrides.margin_x.or(self.margin_x),
            margin_y: overrides.margin_y.or(self.margin_y),
            inertia: overrides.inertia.or(self.inertia),
        }
    }

    /// Check the fields that are present.
    ///
    /// Infinite bounds are allowed (they mean "unbounded on that side").
    /// Bound inversion is only detected when both sides of an axis are set;
    /// merge with the current state first to check a partial update.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a non-finite position, NaN bound,
    /// inverted bounds, a negative or non-finite margin, or an inertia
    /// outside `(0, 1)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_not_nan("minX", self.min_x)?;
        check_not_nan("minY", self.min_y)?;
        check_not_nan("maxX", self.max_x)?;
        check_not_nan("maxY", self.max_y)?;
        check_order(Axis::X, self.min_x, self.max_x)?;
        check_order(Axis::Y, self.min_y, self.max_y)?;
        check_margin(Axis::X, "marginX", self.margin_x)?;
        check_margin(Axis::Y, "marginY", self.margin_y)?;
        if let Some(k) = self.inertia {
            if k.is_nan() || k <= 0.0 || k >= 1.0 {
                return Err(ConfigError::InertiaOutOfRange(k));
            }
        }
        Ok(())
    }

    /// Check `self` as an update to be layered over `current`.
    ///
    /// Only the fields present in `self` are checked, so a degenerate value
    /// already in `current` does not block unrelated updates. Bound order is
    /// checked against the merged result on each axis the update touches.
    ///
    /// # Errors
    ///
    /// As [`MotionConfig::validate`].
    pub fn validate_over(&self, current: &Self) -> Result<(), ConfigError> {
        self.validate()?;
        let merged = current.merged(self);
        if self.min_x.is_some() || self.max_x.is_some() {
            check_order(Axis::X, merged.min_x, merged.max_x)?;
        }
        if self.min_y.is_some() || self.max_y.is_some() {
            check_order(Axis::Y, merged.min_y, merged.max_y)?;
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.is_finite() => Err(ConfigError::NonFinite(name)),
        _ => Ok(()),
    }
}

fn check_not_nan(name: &'static str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if v.is_nan() => Err(ConfigError::NonFinite(name)),
        _ => Ok(()),
    }
}

fn check_order(axis: Axis, min: Option<f64>, max: Option<f64>) -> Result<(), ConfigError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ConfigError::InvertedBounds { axis, min, max }),
        _ => Ok(()),
    }
}

fn check_margin(axis: Axis, name: &'static str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(m) if m.is_nan() || m.is_infinite() => Err(ConfigError::NonFinite(name)),
        Some(m) if m < 0.0 => Err(ConfigError::NegativeMargin { axis, margin: m }),
        _ => Ok(()),
    }
}
