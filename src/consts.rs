//! Shared numeric defaults for the motion model.

// ── Elastic bounds ──────────────────────────────────────────────

/// Default elasticity radius, per axis, in position units.
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Fraction of the remaining overshoot recovered per coasting tick.
pub const SETTLE_FACTOR: f64 = 0.2;

// ── Inertia ─────────────────────────────────────────────────────

/// Fraction of velocity retained after one time unit without dragging.
///
/// At 0.001 only 0.1% of the release velocity survives a full unit.
pub const DEFAULT_INERTIA: f64 = 0.001;
