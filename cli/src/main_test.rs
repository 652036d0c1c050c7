use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("glide").chain(args.iter().copied())).unwrap()
}

#[test]
fn fling_defaults() {
    let cli = parse(&["fling", "--dx", "12"]);
    let Command::Fling(args) = cli.command else {
        panic!("expected fling");
    };
    assert!((args.dx - 12.0).abs() < f64::EPSILON);
    assert_eq!(args.moves, 5);
    assert_eq!(args.ticks, 120);
    assert!(!cli.strict);
}

#[test]
fn fling_accepts_negative_deltas() {
    let cli = parse(&["fling", "--dx", "-8", "--dy", "-3.5"]);
    let Command::Fling(args) = cli.command else {
        panic!("expected fling");
    };
    assert!((args.dx + 8.0).abs() < f64::EPSILON);
    assert!((args.dy + 3.5).abs() < f64::EPSILON);
}

#[test]
fn replay_defaults_to_stdin() {
    let cli = parse(&["replay"]);
    let Command::Replay(args) = cli.command else {
        panic!("expected replay");
    };
    assert_eq!(args.input, "-");
}

#[test]
fn build_motion_applies_config_after_reset() {
    let cli = parse(&["--reset", "--config", r#"{"maxX":200,"marginX":10}"#, "replay"]);
    let motion = build_motion(&cli).unwrap();
    assert_eq!(motion.bounds(), glide::Bounds::new(0.0, 0.0, 200.0, 0.0));
    assert_eq!(motion.margin(), glide::Vec2::new(10.0, 0.0));
}

#[test]
fn build_motion_strict_rejects_bad_inertia() {
    let cli = parse(&["--strict", "--config", r#"{"inertia":3}"#, "replay"]);
    let err = build_motion(&cli).unwrap_err();
    assert!(matches!(err, CliError::Config(ConfigError::InertiaOutOfRange(_))));
}

#[test]
fn build_motion_loose_accepts_bad_inertia() {
    let cli = parse(&["--config", r#"{"inertia":3}"#, "replay"]);
    assert!(build_motion(&cli).is_ok());
}

#[test]
fn write_samples_emits_json_lines() {
    let mut motion = Motion2D::new();
    let samples = run(&mut motion, &script::fling(1.0, 0.0, 1, 1, 1.0), false).unwrap();
    let mut buf = Vec::new();
    write_samples(&mut buf, &samples, false).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["dragging"], true);
}
