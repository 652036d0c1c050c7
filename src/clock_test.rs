#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn first_tick_is_zero() {
    let source = ManualSource::new(10.0);
    let mut clock = FrameClock::new(&source);
    assert_eq!(clock.last_tick_time(), None);
    assert_eq!(clock.tick(), 0.0);
    assert_eq!(clock.last_tick_time(), Some(10.0));
}

#[test]
fn tick_reports_elapsed_since_previous() {
    let source = ManualSource::new(0.0);
    let mut clock = FrameClock::new(&source);
    clock.tick();
    source.advance_by(0.25);
    assert_eq!(clock.tick(), 0.25);
    source.advance_by(0.5);
    assert_eq!(clock.tick(), 0.5);
}

#[test]
fn backwards_source_yields_negative_delta() {
    let source = ManualSource::new(5.0);
    let mut clock = FrameClock::new(&source);
    clock.tick();
    source.set(4.0);
    assert_eq!(clock.tick(), -1.0);
}

#[test]
fn restart_makes_next_tick_zero() {
    let source = ManualSource::new(0.0);
    let mut clock = FrameClock::new(&source);
    clock.tick();
    source.advance_by(3.0);
    clock.restart();
    assert_eq!(clock.tick(), 0.0);
}

#[test]
fn advance_first_tick_leaves_motion_untouched() {
    let source = ManualSource::new(0.0);
    let mut clock = FrameClock::new(&source);
    let mut motion = Motion2D::new();
    motion.drag(10.0, 0.0);
    let before = motion.clone();
    assert_eq!(clock.advance(&mut motion), 0.0);
    assert_eq!(motion, before);
}

#[test]
fn advance_feeds_measured_delta() {
    let source = ManualSource::new(0.0);
    let mut clock = FrameClock::new(&source);
    let mut motion = Motion2D::new();
    motion.set_inertia(0.25);
    clock.advance(&mut motion);

    motion.drag(8.0, 0.0);
    source.advance_by(0.5);
    clock.advance(&mut motion);
    assert_eq!(motion.position().x, 8.0);
    assert!((motion.velocity().x - 4.0).abs() < 1e-12);
}

#[test]
fn backwards_source_does_not_move_motion() {
    let source = ManualSource::new(1.0);
    let mut clock = FrameClock::new(&source);
    let mut motion = Motion2D::new();
    clock.advance(&mut motion);
    motion.drag(1.0, 1.0);
    source.set(0.5);
    clock.advance(&mut motion);
    assert_eq!(motion.position(), crate::geom::Vec2::ZERO);
}

#[test]
fn monotonic_source_never_goes_backwards() {
    let mut clock = FrameClock::<MonotonicSource>::default();
    clock.tick();
    for _ in 0..100 {
        assert!(clock.tick() >= 0.0);
    }
}
