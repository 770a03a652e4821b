use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use percolation::{PercolationStats, StatsConfig};

/// Parse a strictly positive integer argument
fn parse_positive(s: &str) -> Result<i64, String> {
    let value: i64 = s
        .trim()
        .parse()
        .map_err(|e| format!("Invalid number '{s}': {e}"))?;

    if value <= 0 {
        return Err(format!("{value} is not positive; expected an integer >= 1"));
    }

    Ok(value)
}

/// Percolation - Monte Carlo estimate of the site percolation threshold
///
/// Repeatedly opens random sites of an n-by-n grid until the top row connects
/// to the bottom row, and reports statistics of the open-site fraction.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid side length n
    #[clap(value_name = "GRID_SIZE", value_parser = parse_positive)]
    grid_size: i64,

    /// Number of independent trials t
    #[clap(value_name = "TRIALS", value_parser = parse_positive)]
    trials: i64,

    /// Seed the random generator for reproducible runs
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = StatsConfig::new(args.grid_size, args.trials);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let stats = PercolationStats::run(&config).with_context(|| {
        format!(
            "Failed to run {} trials on a {}x{} grid",
            args.trials, args.grid_size, args.grid_size
        )
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Mean: {:.6}", stats.mean())?;
    writeln!(out, "Standard Deviation: {:.6}", stats.stddev())?;
    writeln!(
        out,
        "95% Confidence Interval: [{:.6},{:.6}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    )?;

    Ok(())
}
