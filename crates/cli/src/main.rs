//! Range proof round-trip CLI tool
//!
//! Proves a value in `[0, 2^bits)` and verifies the result, reporting whether
//! the outcome matches what the value's range predicts.

use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use rangeproof_cli::{run_round_trip, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(false)
        .init();

    let config = cli.resolve_config()?;
    tracing::info!(value = cli.value, bits = config.bit_length, "running range proof round trip");

    let report = match cli.rng_seed {
        Some(seed) => run_round_trip(&config, cli.value, &mut StdRng::seed_from_u64(seed))?,
        None => run_round_trip(&config, cli.value, &mut rand::thread_rng())?,
    };

    println!("value:        {}", report.value);
    println!("bit length:   {}", report.bit_length);
    if !report.in_range {
        println!("proven value: {} (truncated)", report.proven_value);
    }
    println!("proof size:   {} bytes", report.proof_bytes.len());
    if cli.verbose {
        println!("proof:        {}", report.proof_hex());
    }

    match report.verdict {
        range::Verdict::Verified => println!("verification: passed"),
        range::Verdict::Rejected(reason) => println!("verification: failed ({})", reason),
    }

    if report.is_expected() {
        println!("outcome:      expected");
        Ok(())
    } else {
        println!("outcome:      UNEXPECTED");
        std::process::exit(1);
    }
}
