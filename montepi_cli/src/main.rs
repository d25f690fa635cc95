//! montepi CLI
//!
//! Estimate pi by Monte Carlo rejection sampling.

use clap::Parser;
use montepi_core::{Estimator, RunResult, SampleCount};
use montepi_env::{EntropySource, RandomSource, SeededSource};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Estimate pi by sampling random points in the unit square
#[derive(Parser, Debug)]
#[command(name = "montepi")]
#[command(version = concat!("version ", env!("CARGO_PKG_VERSION")))]
#[command(about = "Estimate pi by sampling random points in the unit square", long_about = None)]
struct Args {
    /// Number of sample points (positive integer)
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    number: SampleCount,

    /// Seed for a reproducible run (omit to draw from OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output for machine parsing
    #[arg(long)]
    json: bool,
}

/// Builds the random source requested on the command line.
fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(EntropySource::new()),
    }
}

/// Seed as shown in logs; unseeded runs have nothing to replay.
fn seed_label(seed: Option<u64>) -> String {
    match seed {
        Some(seed) => seed.to_string(),
        None => "entropy".to_string(),
    }
}

/// `RUST_LOG` wins when set, otherwise INFO (DEBUG with `--verbose`).
fn log_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn render_json(result: &RunResult, seed: Option<u64>) -> Result<String, serde_json::Error> {
    let summary = serde_json::json!({
        "attempts": result.attempts,
        "inside": result.inside,
        "estimate": result.estimate,
        "abs_error": result.abs_error(),
        "seed": seed,
    });
    serde_json::to_string_pretty(&summary)
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the result
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(args.verbose))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: failed to set tracing subscriber: {}", e);
        std::process::exit(1);
    }

    let mut estimator = Estimator::new(random_source(args.seed));
    let seed = estimator.source().seed();

    info!("Sampling {} points (seed={})", args.number, seed_label(seed));

    let result = estimator.run(args.number);

    debug!(
        "inside={} attempts={} abs_error={:.6}",
        result.inside,
        result.attempts,
        result.abs_error()
    );

    if args.json {
        match render_json(&result, seed) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", result);
    }
}
