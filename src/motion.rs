//! The drag/inertia/elastic-bounds state machine.
//!
//! `Motion2D` has two phases. While [`Phase::Dragging`], the raw position
//! integrates the pointer's per-tick delta and the display position is its
//! elastic clamp. While [`Phase::Coasting`], the last delta keeps being
//! integrated but decays exponentially, and a display position left outside
//! the bounds springs back a fixed fraction of the way each tick.
//!
//! The core only ever consumes explicit elapsed time; see [`crate::clock`]
//! for a wall-clock helper.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use serde::{Deserialize, Serialize};

use crate::clamp::{elastic_clamp, hard_clamp, settle_toward};
use crate::config::MotionConfig;
use crate::consts::{DEFAULT_INERTIA, DEFAULT_MARGIN};
use crate::error::ConfigError;
use crate::geom::{Bounds, Vec2};

/// Which branch `advance` takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// A drag is active; the display position follows the pointer.
    Dragging,
    /// No drag; velocity decays and the display settles into bounds.
    #[default]
    Coasting,
}

/// Smoothed 2D position driven by drag deltas and elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion2D {
    /// Raw accumulated position, unclamped.
    position: Vec2,
    /// Raw position before the last effective tick.
    previous: Vec2,
    /// Clamped or spring-corrected position handed to the host.
    display: Vec2,
    /// Per-tick delta: the pointer's while dragging, decaying while coasting.
    velocity: Vec2,
    bounds: Bounds,
    margin: Vec2,
    inertia: f64,
    phase: Phase,
}

impl Default for Motion2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            previous: Vec2::ZERO,
            display: Vec2::ZERO,
            velocity: Vec2::ZERO,
            bounds: Bounds::UNBOUNDED,
            margin: Vec2::splat(DEFAULT_MARGIN),
            inertia: DEFAULT_INERTIA,
            phase: Phase::Coasting,
        }
    }
}

impl Motion2D {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from defaults with `config` applied on top.
    #[must_use]
    pub fn with_config(config: &MotionConfig) -> Self {
        let mut motion = Self::default();
        motion.configure(config);
        motion
    }

    // --- Configuration ---

    pub fn set_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        self.bounds = Bounds::new(min_x, min_y, max_x, max_y);
    }

    pub fn set_min(&mut self, min_x: f64, min_y: f64) {
        self.bounds.min_x = min_x;
        self.bounds.min_y = min_y;
    }

    pub fn set_max(&mut self, max_x: f64, max_y: f64) {
        self.bounds.max_x = max_x;
        self.bounds.max_y = max_y;
    }

    pub fn set_margin(&mut self, margin_x: f64, margin_y: f64) {
        self.margin = Vec2::new(margin_x, margin_y);
    }

    /// Set the fraction of velocity kept per time unit of coasting.
    ///
    /// Values outside `(0, 1)` are accepted: `>= 1` never decays, `0` stops
    /// dead on the first coasting tick.
    pub fn set_inertia(&mut self, inertia: f64) {
        self.inertia = inertia;
    }

    /// Place the element at rest at `(x, y)`, hard-clamped into the bounds.
    pub fn set_position(&mut self, x: f64, y: f64) {
        let b = self.bounds;
        let p = Vec2::new(hard_clamp(x, b.min_x, b.max_x), hard_clamp(y, b.min_y, b.max_y));
        self.position = p;
        self.previous = p;
        self.display = p;
    }

    /// Zero bounds, margins and position.
    ///
    /// The default infinite bounds are wrong for most hosts, so this is the
    /// starting point for "reset, then configure only what matters".
    pub fn reset(&mut self) {
        tracing::debug!("motion reset");
        self.bounds = Bounds::ZERO;
        self.margin = Vec2::ZERO;
        self.position = Vec2::ZERO;
        self.previous = Vec2::ZERO;
        self.display = Vec2::ZERO;
    }

    /// Apply the fields present in `config`; omitted fields keep their values.
    ///
    /// Bounds are applied before the position so the position clamps against
    /// the new bounds. No validation happens here.
    pub fn configure(&mut self, config: &MotionConfig) {
        let b = &mut self.bounds;
        b.min_x = config.min_x.unwrap_or(b.min_x);
        b.min_y = config.min_y.unwrap_or(b.min_y);
        b.max_x = config.max_x.unwrap_or(b.max_x);
        b.max_y = config.max_y.unwrap_or(b.max_y);
        self.margin.x = config.margin_x.unwrap_or(self.margin.x);
        self.margin.y = config.margin_y.unwrap_or(self.margin.y);
        self.inertia = config.inertia.unwrap_or(self.inertia);
        if config.x.is_some() || config.y.is_some() {
            let x = config.x.unwrap_or(self.position.x);
            let y = config.y.unwrap_or(self.position.y);
            self.set_position(x, y);
        }
        tracing::debug!(bounds = ?self.bounds, margin = ?self.margin, inertia = self.inertia, "motion configured");
    }

    /// Validate `config` as an update over the current state, then apply it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`MotionConfig::validate_over`];
    /// nothing is applied in that case.
    pub fn try_configure(&mut self, config: &MotionConfig) -> Result<(), ConfigError> {
        config.validate_over(&self.config())?;
        self.configure(config);
        Ok(())
    }

    /// Snapshot of the current configuration with every field present.
    #[must_use]
    pub fn config(&self) -> MotionConfig {
        MotionConfig {
            x: Some(self.position.x),
            y: Some(self.position.y),
            min_x: Some(self.bounds.min_x),
            min_y: Some(self.bounds.min_y),
            max_x: Some(self.bounds.max_x),
            max_y: Some(self.bounds.max_y),
            margin_x: Some(self.margin.x),
            margin_y: Some(self.margin.y),
            inertia: Some(self.inertia),
        }
    }

    // --- Drag input ---

    /// Begin a drag. Any momentum left from a previous release is dropped.
    pub fn start_drag(&mut self) {
        if self.phase != Phase::Dragging {
            tracing::debug!(x = self.display.x, y = self.display.y, "drag started");
        }
        self.phase = Phase::Dragging;
        self.velocity = Vec2::ZERO;
    }

    pub fn stop_drag(&mut self) {
        if self.phase == Phase::Dragging {
            tracing::debug!(vx = self.velocity.x, vy = self.velocity.y, "drag released");
        }
        self.phase = Phase::Coasting;
    }

    /// Record the pointer's delta for the coming tick.
    ///
    /// Overwrites, does not accumulate: only the latest delta before a tick
    /// is integrated. Accepted in either phase.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.velocity = Vec2::new(dx, dy);
    }

    // --- Tick ---

    /// Advance by `delta_time` units. Non-positive (or NaN) deltas are no-ops.
    pub fn advance(&mut self, delta_time: f64) {
        if delta_time.is_nan() || delta_time <= 0.0 {
            tracing::trace!(delta_time, "tick skipped");
            return;
        }

        self.previous = self.position;
        self.position += self.velocity;

        let b = self.bounds;
        let m = self.margin;
        match self.phase {
            Phase::Dragging => {
                self.display = Vec2::new(
                    elastic_clamp(self.position.x, b.min_x, b.max_x, m.x),
                    elastic_clamp(self.position.y, b.min_y, b.max_y, m.y),
                );
            }
            Phase::Coasting => {
                let (dx, px) = coast_axis(self.display.x, self.position.x, b.min_x, b.max_x, m.x);
                let (dy, py) = coast_axis(self.display.y, self.position.y, b.min_y, b.max_y, m.y);
                self.display = Vec2::new(dx, dy);
                self.position = Vec2::new(px, py);
                self.velocity = self.velocity.scale(self.inertia.powf(delta_time));
            }
        }

        tracing::trace!(
            delta_time,
            x = self.display.x,
            y = self.display.y,
            phase = ?self.phase,
            "tick"
        );
    }

    // --- Queries ---

    /// The position the host should render.
    #[must_use]
    pub fn display_position(&self) -> Vec2 {
        self.display
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.display.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.display.y
    }

    /// Raw, unclamped position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn margin(&self) -> Vec2 {
        self.margin
    }

    #[must_use]
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Raw position change over the last effective tick.
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        self.position - self.previous
    }

    /// Coasting, within `epsilon` of the bounds, and slower than `epsilon`
    /// per tick.
    ///
    /// The spring-back only approaches a bound asymptotically, so "inside"
    /// is checked with the same tolerance. Hosts can stop scheduling frames
    /// once this holds.
    #[must_use]
    pub fn is_at_rest(&self, epsilon: f64) -> bool {
        self.phase == Phase::Coasting
            && self.bounds.overshoot(self.display).length() < epsilon
            && self.velocity.length() < epsilon
    }
}

/// One coasting step on one axis, returning `(display, position)`.
///
/// A display already outside `[min, max]` springs back and drags the raw
/// position with it. Otherwise the display tracks the raw position, softly
/// clamped so a fling that just crossed a bound stays within the margin.
/// If the clamp pinned the display on the bound (zero margin) while the raw
/// position is outside, the raw position snaps to the display.
fn coast_axis(display: f64, position: f64, min: f64, max: f64, margin: f64) -> (f64, f64) {
    if let Some(settled) = settle_toward(display, min, max) {
        return (settled, settled);
    }
    let shown = elastic_clamp(position, min, max, margin);
    let inside = |v: f64| v >= min && v <= max;
    if inside(shown) && !inside(position) {
        (shown, shown)
    } else {
        (shown, position)
    }
}
