//! Host event model and deterministic replay.
//!
//! A script is what a UI host would feed a [`Motion2D`] over time:
//! pointer-down becomes [`DragEvent::Start`], each pointer-move delta a
//! [`DragEvent::Move`], pointer-up a [`DragEvent::Stop`], and every animation
//! frame a [`DragEvent::Tick`]. Replaying a script yields one [`Sample`] per
//! tick, which is what the host would have rendered.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::config::MotionConfig;
use crate::error::ConfigError;
use crate::motion::Motion2D;

/// One host-side input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    /// Pointer pressed on the element.
    Start,
    /// Pointer moved while pressed, by `(dx, dy)` since the last move.
    Move { dx: f64, dy: f64 },
    /// Pointer released.
    Stop,
    /// One animation frame, `dt` time units after the previous.
    Tick { dt: f64 },
    /// Partial reconfiguration, e.g. after the container was resized.
    Configure { config: MotionConfig },
    /// Zero bounds, margins and position.
    Reset,
}

/// What the host reads back after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Accumulated elapsed time.
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub raw_x: f64,
    pub raw_y: f64,
    pub vx: f64,
    pub vy: f64,
    pub dragging: bool,
}

impl Sample {
    #[must_use]
    pub fn capture(t: f64, motion: &Motion2D) -> Self {
        let display = motion.display_position();
        let raw = motion.position();
        let velocity = motion.velocity();
        Self {
            t,
            x: display.x,
            y: display.y,
            raw_x: raw.x,
            raw_y: raw.y,
            vx: velocity.x,
            vy: velocity.y,
            dragging: motion.is_dragging(),
        }
    }
}

/// Apply one event. Configuration is applied without validation.
pub fn apply(motion: &mut Motion2D, event: &DragEvent) {
    match event {
        DragEvent::Start => motion.start_drag(),
        DragEvent::Move { dx, dy } => motion.drag(*dx, *dy),
        DragEvent::Stop => motion.stop_drag(),
        DragEvent::Tick { dt } => motion.advance(*dt),
        DragEvent::Configure { config } => motion.configure(config),
        DragEvent::Reset => motion.reset(),
    }
}

/// Replay `events`, collecting a sample after every tick.
#[must_use]
pub fn replay(motion: &mut Motion2D, events: &[DragEvent]) -> Vec<Sample> {
    let Ok(samples) = replay_with::<Infallible>(motion, events, |motion, event| {
        apply(motion, event);
        Ok(())
    });
    samples
}

/// Like [`replay`], but every `Configure` event is validated first.
///
/// # Errors
///
/// Returns the first [`ConfigError`]; events before it have been applied.
pub fn replay_strict(motion: &mut Motion2D, events: &[DragEvent]) -> Result<Vec<Sample>, ConfigError> {
    replay_with(motion, events, |motion, event| match event {
        DragEvent::Configure { config } => motion.try_configure(config),
        _ => {
            apply(motion, event);
            Ok(())
        }
    })
}

fn replay_with<E>(
    motion: &mut Motion2D,
    events: &[DragEvent],
    mut step: impl FnMut(&mut Motion2D, &DragEvent) -> Result<(), E>,
) -> Result<Vec<Sample>, E> {
    let mut t = 0.0;
    let mut samples = Vec::new();
    for event in events {
        step(motion, event)?;
        if let DragEvent::Tick { dt } = event {
            if *dt > 0.0 {
                t += dt;
            }
            samples.push(Sample::capture(t, motion));
        }
    }
    tracing::debug!(events = events.len(), samples = samples.len(), "script replayed");
    Ok(samples)
}

/// Parse a script given either as one JSON array or as JSON lines.
///
/// Blank lines and lines starting with `#` are skipped in JSON-lines form.
///
/// # Errors
///
/// Returns [`ConfigError::Json`] for a malformed array and
/// [`ConfigError::ScriptLine`] (1-based) for a malformed line.
pub fn parse_script(raw: &str) -> Result<Vec<DragEvent>, ConfigError> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let mut events = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|source| ConfigError::ScriptLine { line: idx + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

/// A synthetic fling: press, `moves` frames each moving by `(dx, dy)`,
/// release, then `coast_ticks` frames with no input. Every frame is `dt`.
#[must_use]
pub fn fling(dx: f64, dy: f64, moves: usize, coast_ticks: usize, dt: f64) -> Vec<DragEvent> {
    let mut events = Vec::with_capacity(2 * moves + coast_ticks + 2);
    events.push(DragEvent::Start);
    for _ in 0..moves {
        events.push(DragEvent::Move { dx, dy });
        events.push(DragEvent::Tick { dt });
    }
    events.push(DragEvent::Stop);
    events.extend(std::iter::repeat_n(DragEvent::Tick { dt }, coast_ticks));
    events
}
