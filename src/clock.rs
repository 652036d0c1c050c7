//! Wall-clock delta helper for hosts without their own frame clock.
//!
//! The motion core only understands explicit elapsed time. `FrameClock`
//! remembers when it last ticked and hands out the difference, in seconds.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::Cell;
use std::time::Instant;

use crate::motion::Motion2D;

/// Anything that can report "now" in seconds.
pub trait TimeSource {
    fn now_secs(&self) -> f64;
}

/// Monotonic seconds since the source was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicSource {
    origin: Instant,
}

impl Default for MonotonicSource {
    fn default() -> Self {
        Self { origin: Instant::now() }
    }
}

impl TimeSource for MonotonicSource {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A clock moved by hand.
///
/// Hand a `FrameClock` a `&ManualSource` to keep driving it from outside.
#[derive(Debug, Default)]
pub struct ManualSource {
    now: Cell<f64>,
}

impl ManualSource {
    #[must_use]
    pub fn new(start: f64) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance_by(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl TimeSource for ManualSource {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_secs(&self) -> f64 {
        (**self).now_secs()
    }
}

/// Turns a [`TimeSource`] into per-tick deltas.
#[derive(Debug)]
pub struct FrameClock<S> {
    source: S,
    last_tick_time: Option<f64>,
}

impl Default for FrameClock<MonotonicSource> {
    fn default() -> Self {
        Self::new(MonotonicSource::default())
    }
}

impl<S: TimeSource> FrameClock<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source, last_tick_time: None }
    }

    /// Seconds since the previous tick; 0 on the first.
    ///
    /// A source that steps backwards yields a negative delta, which
    /// [`Motion2D::advance`] treats as a no-op.
    pub fn tick(&mut self) -> f64 {
        let now = self.source.now_secs();
        let delta = self.last_tick_time.map_or(0.0, |last| now - last);
        self.last_tick_time = Some(now);
        delta
    }

    /// Tick and advance `motion` by the measured delta. Returns the delta.
    pub fn advance(&mut self, motion: &mut Motion2D) -> f64 {
        let delta = self.tick();
        motion.advance(delta);
        delta
    }

    #[must_use]
    pub fn last_tick_time(&self) -> Option<f64> {
        self.last_tick_time
    }

    /// Forget the previous tick, e.g. after the host was paused.
    pub fn restart(&mut self) {
        self.last_tick_time = None;
    }
}
