//! Errors for strict configuration and script parsing.
//!
//! The motion core itself never fails; these errors only surface when a host
//! opts into validation or hands us JSON.

/// Which axis a configuration error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Error returned by [`crate::config::MotionConfig::validate`] and the JSON loaders.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Lower bound is greater than the upper bound on one axis.
    #[error("inverted {axis} bounds: min {min} > max {max}")]
    InvertedBounds { axis: Axis, min: f64, max: f64 },
    /// Elasticity radius is negative or NaN.
    #[error("invalid {axis} margin: {margin} (must be >= 0)")]
    NegativeMargin { axis: Axis, margin: f64 },
    /// Inertia factor is outside the open interval (0, 1).
    #[error("inertia {0} outside (0, 1)")]
    InertiaOutOfRange(f64),
    /// A field that must be a finite number is not.
    #[error("`{0}` must be a finite number")]
    NonFinite(&'static str),
    /// The input was not valid JSON for the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// One line of a JSON-lines script failed to parse.
    #[error("script line {line}: {source}")]
    ScriptLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
