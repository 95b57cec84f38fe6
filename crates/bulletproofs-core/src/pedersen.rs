//! Pedersen commitments to a single value

use crate::{group, BulletproofsResult, GeneratorSet};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar, traits::MultiscalarMul};
use rand_core::{CryptoRng, RngCore};
use std::fmt;

/// Hiding commitment `V = v·G + b·H` that owns its blinding factor.
///
/// Not serializable or cloneable, and the blinding factor never leaves the
/// commitment: callers only see linear combinations of blindings through
/// [`PedersenCommitment::blinding_combination`].
pub struct PedersenCommitment {
    value: Scalar,
    blinding: Scalar,
}

impl PedersenCommitment {
    /// Commit to `value` with a fresh uniformly random blinding factor
    pub fn new<R: RngCore + CryptoRng>(value: Scalar, rng: &mut R) -> Self {
        Self {
            value,
            blinding: group::random_scalar(rng),
        }
    }

    /// Commit to `value` with an explicit blinding factor
    pub fn with_blinding(value: Scalar, blinding: Scalar) -> Self {
        Self { value, blinding }
    }

    /// Build from big-endian encodings, rejecting out-of-field input
    pub fn from_canonical_bytes(value: &[u8], blinding: &[u8]) -> BulletproofsResult<Self> {
        Ok(Self {
            value: group::decode_scalar(value)?,
            blinding: group::decode_scalar(blinding)?,
        })
    }

    /// The committed value
    pub fn value(&self) -> &Scalar {
        &self.value
    }

    /// `Σ weight_i·b_i` over the blinding factors of `terms`
    pub fn blinding_combination(terms: &[(&PedersenCommitment, Scalar)]) -> Scalar {
        terms
            .iter()
            .map(|(commitment, weight)| commitment.blinding * weight)
            .sum()
    }

    /// Compute `b·H + v·G` against the generator set's `G` and `H`
    pub fn commit(&self, generators: &GeneratorSet) -> RistrettoPoint {
        RistrettoPoint::multiscalar_mul([self.blinding, self.value], [generators.h, generators.g])
    }
}

impl fmt::Debug for PedersenCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PedersenCommitment")
            .field("value", &"<hidden>")
            .field("blinding", &"<redacted>")
            .finish()
    }
}
