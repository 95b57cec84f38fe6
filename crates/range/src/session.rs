//! Single-use range proof sessions

use crate::{RangeProofArtifact, RangeProofConfig, RangeProver, RangeVerifier, RejectReason, Verdict};
use bulletproofs_core::{BulletproofsError, BulletproofsResult, RistrettoPoint, Sha256Transcript, TranscriptProtocol};
use rand_core::{CryptoRng, RngCore};

/// Lifecycle of a [`RangeProof`] session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeProofState {
    Unstarted,
    ProofGenerated,
    Verified,
    Rejected(RejectReason),
}

impl RangeProofState {
    /// Whether the session has finished and accepts no further operations
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RangeProofState::Unstarted)
    }
}

/// A range proof session bound to one bit length and one transcript.
///
/// Each session either generates one proof or verifies one proof; a second
/// operation is an [`BulletproofsError::InvalidState`] error.
#[derive(Debug)]
pub struct RangeProof<T: TranscriptProtocol = Sha256Transcript> {
    prover: RangeProver,
    verifier: RangeVerifier,
    transcript: T,
    state: RangeProofState,
}

impl RangeProof {
    /// Create a session over the default SHA-256 transcript
    pub fn new(config: &RangeProofConfig) -> BulletproofsResult<Self> {
        Self::with_transcript(config)
    }
}

impl<T: TranscriptProtocol> RangeProof<T> {
    /// Create a session over a fresh transcript of type `T`
    pub fn with_transcript(config: &RangeProofConfig) -> BulletproofsResult<Self> {
        let generators = config.generators()?;
        Ok(Self {
            prover: RangeProver::with_generators(generators.clone(), config.bit_length)?,
            verifier: RangeVerifier::with_generators(generators, config.bit_length)?,
            transcript: T::new_session(),
            state: RangeProofState::Unstarted,
        })
    }

    pub fn state(&self) -> RangeProofState {
        self.state
    }

    pub fn bit_length(&self) -> usize {
        self.prover.bit_length()
    }

    /// Generate a proof that `value ∈ [0, 2^bit_length)`, returning the
    /// artifact and the value commitment `V`
    pub fn generate_proof<R: RngCore + CryptoRng>(
        &mut self,
        value: u64,
        rng: &mut R,
    ) -> BulletproofsResult<(RangeProofArtifact, RistrettoPoint)> {
        self.ensure_unstarted("generate_proof")?;

        match self.prover.prove(value, rng, &mut self.transcript) {
            Ok(output) => {
                self.state = RangeProofState::ProofGenerated;
                Ok(output)
            }
            Err(err) => {
                // A failed attempt must not leak partial transcript state into a retry
                self.transcript = T::new_session();
                Err(err)
            }
        }
    }

    /// Verify `artifact` against the value commitment `v`
    pub fn verify(&mut self, artifact: &RangeProofArtifact, v: &RistrettoPoint) -> BulletproofsResult<Verdict> {
        self.ensure_unstarted("verify")?;

        let verdict = match self.verifier.verify(artifact, v, &mut self.transcript) {
            Ok(verdict) => verdict,
            Err(err) => {
                self.transcript = T::new_session();
                return Err(err);
            }
        };

        self.state = match verdict {
            Verdict::Verified => RangeProofState::Verified,
            Verdict::Rejected(reason) => RangeProofState::Rejected(reason),
        };
        Ok(verdict)
    }

    fn ensure_unstarted(&self, operation: &str) -> BulletproofsResult<()> {
        if self.state.is_terminal() {
            return Err(BulletproofsError::InvalidState(format!(
                "{} called on a session in state {:?}",
                operation, self.state
            )));
        }
        Ok(())
    }
}
