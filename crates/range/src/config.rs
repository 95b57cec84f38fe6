//! Range proof configuration

use bulletproofs_core::{BulletproofsError, BulletproofsResult, GeneratorSet, DEFAULT_GENERATOR_SEED};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Bit lengths a range proof can be built for
pub const SUPPORTED_BIT_LENGTHS: [usize; 6] = [2, 4, 8, 16, 32, 64];

/// Check that `bits` is one of [`SUPPORTED_BIT_LENGTHS`]
pub fn validate_bit_length(bits: usize) -> BulletproofsResult<()> {
    if SUPPORTED_BIT_LENGTHS.contains(&bits) {
        Ok(())
    } else {
        Err(BulletproofsError::UnsupportedBitLength { bits })
    }
}

/// Parameters shared by the prover and the verifier of a range proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeProofConfig {
    /// Proofs attest `value ∈ [0, 2^bit_length)`
    pub bit_length: usize,
    /// Public seed the generators are derived from
    pub generator_seed: String,
}

impl Default for RangeProofConfig {
    fn default() -> Self {
        Self {
            bit_length: 32,
            generator_seed: String::from_utf8_lossy(DEFAULT_GENERATOR_SEED).into_owned(),
        }
    }
}

impl RangeProofConfig {
    /// Default configuration for the given bit length
    pub fn with_bit_length(bit_length: usize) -> Self {
        Self {
            bit_length,
            ..Self::default()
        }
    }

    /// Reject unsupported bit lengths and empty seeds
    pub fn validate(&self) -> BulletproofsResult<()> {
        validate_bit_length(self.bit_length)?;
        if self.generator_seed.is_empty() {
            return Err(BulletproofsError::InvalidParameters(
                "Generator seed cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Shared generator set for this configuration
    pub fn generators(&self) -> BulletproofsResult<Arc<GeneratorSet>> {
        self.validate()?;
        GeneratorSet::cached(self.generator_seed.as_bytes(), self.bit_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_bit_lengths() {
        for bits in SUPPORTED_BIT_LENGTHS {
            assert!(RangeProofConfig::with_bit_length(bits).validate().is_ok());
        }
        for bits in [0, 1, 3, 10, 63, 128] {
            assert_eq!(
                RangeProofConfig::with_bit_length(bits).validate(),
                Err(BulletproofsError::UnsupportedBitLength { bits })
            );
        }
    }

    #[test]
    fn test_empty_seed_rejected() {
        let config = RangeProofConfig {
            bit_length: 8,
            generator_seed: String::new(),
        };
        assert!(config.generators().is_err());
    }

    #[test]
    fn test_default_seed_matches_core() {
        let config = RangeProofConfig::default();
        assert_eq!(config.generator_seed.as_bytes(), DEFAULT_GENERATOR_SEED);
        assert_eq!(config.generators().unwrap().vector_length(), 32);
    }

    #[test]
    fn test_json_fields_default() {
        let config: RangeProofConfig = serde_json::from_str(r#"{ "bit_length": 16 }"#).unwrap();
        assert_eq!(config, RangeProofConfig::with_bit_length(16));
    }
}
