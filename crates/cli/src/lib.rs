//! # Range Proof CLI
//!
//! Runs one generate→verify round trip for a `(value, bit_length)` pair.
//! Values outside `[0, 2^bit_length)` are proven by their low bits and then
//! verified against a commitment to the real value, which must be rejected.

use anyhow::{Context, Result};
use bulletproofs_core::{RistrettoPoint, Scalar};
use clap::Parser;
use rand::{CryptoRng, RngCore};
use range::{RangeProof, RangeProofConfig, Verdict};
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "rangeproof")]
#[command(about = "Generate and verify a Bulletproofs range proof")]
#[command(version)]
pub struct Cli {
    /// Value to prove; may be negative or exceed the range
    #[arg(long, allow_hyphen_values = true)]
    pub value: i128,

    /// Bit length of the range (2, 4, 8, 16, 32 or 64)
    #[arg(long)]
    pub bits: Option<usize>,

    /// JSON file with a range proof configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Public seed for generator derivation
    #[arg(long)]
    pub seed: Option<String>,

    /// Seed the blinding randomness for a reproducible proof
    #[arg(long)]
    pub rng_seed: Option<u64>,

    /// Log at debug level and print the proof bytes
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file (if any) and apply flag overrides
    pub fn resolve_config(&self) -> Result<RangeProofConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RangeProofConfig::default(),
        };
        if let Some(bits) = self.bits {
            config.bit_length = bits;
        }
        if let Some(seed) = &self.seed {
            config.generator_seed = seed.clone();
        }
        config.validate().context("Invalid range proof configuration")?;
        Ok(config)
    }
}

/// Read a [`RangeProofConfig`] from a JSON file
pub fn load_config(path: &Path) -> Result<RangeProofConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Split `value` into the low `bits` bits that get proven and the
/// remainder `value - truncated`
pub fn split_value(value: i128, bits: usize) -> (u64, i128) {
    let modulus = 1i128 << bits;
    let truncated = value.rem_euclid(modulus);
    (truncated as u64, value - truncated)
}

fn signed_scalar(value: i128) -> Scalar {
    let magnitude = Scalar::from(value.unsigned_abs());
    if value < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Outcome of one round trip
#[derive(Debug, Clone)]
pub struct RoundTripReport {
    pub value: i128,
    pub bit_length: usize,
    pub proven_value: u64,
    pub in_range: bool,
    pub verdict: Verdict,
    pub proof_bytes: Vec<u8>,
}

impl RoundTripReport {
    /// In-range values must verify and out-of-range values must not
    pub fn is_expected(&self) -> bool {
        self.verdict.is_verified() == self.in_range
    }

    pub fn proof_hex(&self) -> String {
        hex::encode(&self.proof_bytes)
    }
}

/// Prove `value` and verify the proof against the commitment to `value`
pub fn run_round_trip<R: RngCore + CryptoRng>(
    config: &RangeProofConfig,
    value: i128,
    rng: &mut R,
) -> Result<RoundTripReport> {
    config.validate()?;
    let (proven_value, offset) = split_value(value, config.bit_length);
    let in_range = offset == 0;
    if !in_range {
        tracing::info!(value, proven_value, "value outside range, proving truncated low bits");
    }

    let mut prover = RangeProof::new(config).context("Failed to set up prover")?;
    let (artifact, v) = prover
        .generate_proof(proven_value, rng)
        .context("Failed to generate range proof")?;

    // Shifting by `offset·G` keeps the blinding and commits to the real value
    let gens = config.generators()?;
    let v_actual: RistrettoPoint = v + gens.g * signed_scalar(offset);

    let mut verifier = RangeProof::new(config).context("Failed to set up verifier")?;
    let verdict = verifier
        .verify(&artifact, &v_actual)
        .context("Failed to verify range proof")?;

    Ok(RoundTripReport {
        value,
        bit_length: config.bit_length,
        proven_value,
        in_range,
        verdict,
        proof_bytes: artifact.to_bytes(),
    })
}
