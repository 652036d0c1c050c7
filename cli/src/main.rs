use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use clap::{Args, Parser, Subcommand};
use glide::script::{self, DragEvent, Sample};
use glide::{ConfigError, Motion2D, MotionConfig};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write samples: {0}")]
    Write(#[from] io::Error),
    #[error("invalid sample JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Parser, Debug)]
#[command(name = "glide", about = "Drive the drag/inertia motion model from scripts")]
struct Cli {
    /// Partial motion config as JSON, e.g. '{"maxX":640,"marginX":40}'.
    #[arg(long, global = true, env = "GLIDE_CONFIG")]
    config: Option<String>,

    /// Zero bounds, margins and position before applying --config.
    #[arg(long, global = true, default_value_t = false)]
    reset: bool,

    /// Reject invalid configuration instead of running with it.
    #[arg(long, global = true, env = "GLIDE_STRICT", default_value_t = false)]
    strict: bool,

    /// Pretty-print each sample.
    #[arg(long, global = true, default_value_t = false)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a script (JSON array or JSON lines) and print one sample per tick.
    Replay(ReplayArgs),
    /// Press, move by a fixed delta for a few frames, release, and coast.
    Fling(FlingArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(long, default_value = "-", help = "Script file path, or - for stdin")]
    input: String,
}

#[derive(Args, Debug)]
struct FlingArgs {
    #[arg(long, allow_hyphen_values = true)]
    dx: f64,

    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    dy: f64,

    #[arg(long, default_value_t = 5)]
    moves: usize,

    #[arg(long, default_value_t = 120)]
    ticks: usize,

    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut motion = build_motion(&cli)?;

    let events = match &cli.command {
        Command::Replay(args) => script::parse_script(&read_input(&args.input)?)?,
        Command::Fling(args) => script::fling(args.dx, args.dy, args.moves, args.ticks, args.dt),
    };

    let samples = run(&mut motion, &events, cli.strict)?;
    write_samples(io::stdout().lock(), &samples, cli.pretty)?;

    let end = motion.display_position();
    tracing::info!(samples = samples.len(), x = end.x, y = end.y, at_rest = motion.is_at_rest(1e-3), "done");
    Ok(())
}

fn build_motion(cli: &Cli) -> Result<Motion2D, CliError> {
    let mut motion = Motion2D::new();
    if cli.reset {
        motion.reset();
    }
    if let Some(raw) = &cli.config {
        let config = MotionConfig::from_json(raw)?;
        if cli.strict {
            motion.try_configure(&config)?;
        } else {
            motion.configure(&config);
        }
    }
    Ok(motion)
}

fn run(motion: &mut Motion2D, events: &[DragEvent], strict: bool) -> Result<Vec<Sample>, CliError> {
    if strict {
        Ok(script::replay_strict(motion, events)?)
    } else {
        Ok(script::replay(motion, events))
    }
}

fn read_input(path: &str) -> Result<String, CliError> {
    let mut raw = String::new();
    let result = if path == "-" {
        io::stdin().read_to_string(&mut raw)
    } else {
        File::open(path).and_then(|mut file| file.read_to_string(&mut raw))
    };
    result.map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    Ok(raw)
}

fn write_samples<W: Write>(out: W, samples: &[Sample], pretty: bool) -> Result<(), CliError> {
    let mut out = BufWriter::new(out);
    for sample in samples {
        if pretty {
            serde_json::to_writer_pretty(&mut out, sample)?;
        } else {
            serde_json::to_writer(&mut out, sample)?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
