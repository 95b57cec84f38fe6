//! Range proof verifier implementation

use crate::{rescaled_h_vec, validate_bit_length, RangeProof, RangeProofArtifact, RangeProofConfig};
use bulletproofs_core::{
    vectors::scalar_powers, BulletproofsError, BulletproofsResult, GeneratorSet, Message, RistrettoPoint, Scalar,
    Sha256Transcript, TranscriptProtocol, VartimeMultiscalarMul,
};
use ipa::InnerProductVerifier;
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Why a range proof was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Undecodable points, wrong number of rounds, or a degenerate challenge
    MalformedProof,
    /// `t·G + tau_x·H != z²·V + δ(y, z)·G + x·T1 + x²·T2`
    PolynomialIdentity,
    /// The inner product argument's final check failed
    InnerProduct,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MalformedProof => write!(f, "malformed proof"),
            RejectReason::PolynomialIdentity => write!(f, "polynomial identity failed"),
            RejectReason::InnerProduct => write!(f, "inner product argument failed"),
        }
    }
}

/// Outcome of verifying a range proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Verified,
    Rejected(RejectReason),
}

impl Verdict {
    /// Whether the proof was accepted
    pub fn is_verified(&self) -> bool {
        matches!(self, Verdict::Verified)
    }
}

/// Verifier for range proofs
#[derive(Debug, Clone)]
pub struct RangeVerifier {
    generators: Arc<GeneratorSet>,
    bit_length: usize,
}

impl RangeVerifier {
    /// Create a range verifier for the configured bit length
    pub fn new(config: &RangeProofConfig) -> BulletproofsResult<Self> {
        Ok(Self {
            generators: config.generators()?,
            bit_length: config.bit_length,
        })
    }

    /// Create a range verifier with existing generators (must match the prover's generators)
    pub fn with_generators(generators: Arc<GeneratorSet>, bit_length: usize) -> BulletproofsResult<Self> {
        validate_bit_length(bit_length)?;
        if generators.vector_length() != bit_length {
            return Err(BulletproofsError::InsufficientGenerators {
                needed: bit_length,
                available: generators.vector_length(),
            });
        }
        Ok(Self { generators, bit_length })
    }

    /// Bit length proofs are checked against
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Get the generator set used by this verifier
    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    /// Verify `artifact` against the value commitment `v`.
    ///
    /// `transcript` must be in the same state the prover's was in when it
    /// started, normally a fresh session.
    #[tracing::instrument(skip_all, name = "RangeVerifier::verify", fields(bit_length = self.bit_length))]
    pub fn verify<T: TranscriptProtocol>(
        &self,
        artifact: &RangeProofArtifact,
        v: &RistrettoPoint,
        transcript: &mut T,
    ) -> BulletproofsResult<Verdict> {
        let n = self.bit_length;
        let gens = &*self.generators;

        let expected_rounds = n.trailing_zeros() as usize;
        if artifact.num_rounds() != expected_rounds {
            tracing::debug!(expected_rounds, actual = artifact.num_rounds(), "wrong inner product round count");
            return Ok(Verdict::Rejected(RejectReason::MalformedProof));
        }
        let points = match artifact.decompress_points() {
            Ok(points) => points,
            Err(_) => {
                tracing::debug!("undecodable commitment in range proof");
                return Ok(Verdict::Rejected(RejectReason::MalformedProof));
            }
        };

        transcript.absorb(&[Message::Point(*v), Message::Point(points.a), Message::Point(points.s)]);
        let yz = transcript.challenge_scalars(2);
        let (y, z) = (yz[0], yz[1]);
        if y == Scalar::ZERO {
            return Ok(Verdict::Rejected(RejectReason::MalformedProof));
        }

        transcript.absorb(&[Message::Point(points.t1), Message::Point(points.t2)]);
        let x = transcript.challenge_scalar();

        let z_sq = z * z;
        let x_sq = x * x;
        let y_powers = scalar_powers(&y, n);
        let powers_of_two = scalar_powers(&Scalar::from(2u64), n);

        // δ(y, z) = (z - z²)·<1, y^n> - z³·<1, 2^n>
        let sum_y: Scalar = y_powers.iter().sum();
        let sum_two: Scalar = powers_of_two.iter().sum();
        let delta = (z - z_sq) * sum_y - z_sq * z * sum_two;

        // t·G + tau_x·H - (z²·V + δ·G + x·T1 + x²·T2) == 0
        let identity_check = RistrettoPoint::vartime_multiscalar_mul(
            [artifact.t - delta, artifact.tau_x, -z_sq, -x, -x_sq],
            [gens.g, gens.h, *v, points.t1, points.t2],
        );
        if identity_check != RistrettoPoint::default() {
            tracing::debug!("polynomial identity failed");
            return Ok(Verdict::Rejected(RejectReason::PolynomialIdentity));
        }

        transcript.absorb(&[
            Message::Scalar(artifact.tau_x),
            Message::Scalar(artifact.mu),
            Message::Scalar(artifact.t),
        ]);
        let u = transcript.challenge_scalar();
        let u_point = gens.g * u;

        let h_prime = rescaled_h_vec(&gens.h_vec, &y);

        // P = A + x·S - z·ΣG_i + Σ(z·y^i + z²·2^i)·H'_i + t·U - mu·H
        let h_prime_scalars = y_powers
            .iter()
            .zip(powers_of_two.iter())
            .map(|(y_i, two_i)| z * y_i + z_sq * two_i);
        let p = RistrettoPoint::vartime_multiscalar_mul(
            [Scalar::ONE, x, artifact.t, -artifact.mu]
                .into_iter()
                .chain(std::iter::repeat(-z).take(n))
                .chain(h_prime_scalars),
            [points.a, points.s, u_point, gens.h]
                .iter()
                .chain(gens.g_vec.iter())
                .chain(h_prime.iter()),
        );

        let ipa_verifier = InnerProductVerifier::new(gens.g_vec.clone(), h_prime, u_point)?;
        if !ipa_verifier.verify(transcript, &artifact.ipa_proof, &p) {
            return Ok(Verdict::Rejected(RejectReason::InnerProduct));
        }

        Ok(Verdict::Verified)
    }
}

/// Verify independent `(artifact, V)` pairs in parallel, each in its own fresh session
pub fn verify_batch(
    config: &RangeProofConfig,
    items: &[(RangeProofArtifact, RistrettoPoint)],
) -> BulletproofsResult<Vec<Verdict>> {
    // Derive the shared generators once before fanning out
    config.generators()?;

    items
        .par_iter()
        .map(|(artifact, v)| {
            let mut session = RangeProof::<Sha256Transcript>::new(config)?;
            session.verify(artifact, v)
        })
        .collect()
}
