//! Drag-with-inertia motion model with elastic bounds.
//!
//! A [`motion::Motion2D`] turns a stream of drag deltas and per-tick elapsed
//! time into a display position that tracks the pointer while dragging,
//! resists leaving its bounds with an elastic soft clamp, glides with
//! exponentially decaying velocity after release, and springs back inside
//! its bounds once released outside them. The host UI layer owns pointer
//! capture and frame scheduling; it only forwards events and reads back the
//! position and drag flag once per tick.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`motion`] | The [`motion::Motion2D`] state and its dragging/coasting state machine |
//! | [`clamp`] | Elastic soft clamp, hard clamp, and the spring-back step |
//! | [`geom`] | [`geom::Vec2`] and the [`geom::Bounds`] rectangle |
//! | [`config`] | Partial-update [`config::MotionConfig`] with optional validation |
//! | [`clock`] | Wall-clock delta helper for hosts without their own frame clock |
//! | [`script`] | Host event model and deterministic replay into per-tick samples |
//! | [`error`] | [`error::ConfigError`] for strict configuration |
//! | [`consts`] | Shared numeric defaults (margin, inertia, settle factor) |

pub mod clamp;
pub mod clock;
pub mod config;
pub mod consts;
pub mod error;
pub mod geom;
pub mod motion;
pub mod script;

pub use config::MotionConfig;
pub use error::ConfigError;
pub use geom::{Bounds, Vec2};
pub use motion::{Motion2D, Phase};
