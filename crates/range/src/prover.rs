//! Range proof prover implementation

use crate::{rescaled_h_vec, validate_bit_length, RangeProofArtifact, RangeProofConfig};
use bulletproofs_core::{
    group::random_scalar_vector,
    vectors::{
        bit_decomposition, hadamard_product, inner_product, scalar_powers, vector_add, vector_add_scalar,
        vector_scale,
    },
    BulletproofsError, BulletproofsResult, GeneratorSet, Message, PedersenCommitment, RistrettoPoint, Scalar,
    TranscriptProtocol, VectorCommitment,
};
use ipa::InnerProductProver;
use rand_core::{CryptoRng, RngCore};
use std::sync::Arc;

/// Prover for generating range proofs
#[derive(Debug, Clone)]
pub struct RangeProver {
    generators: Arc<GeneratorSet>,
    bit_length: usize,
}

impl RangeProver {
    /// Create a range prover for the configured bit length
    pub fn new(config: &RangeProofConfig) -> BulletproofsResult<Self> {
        Ok(Self {
            generators: config.generators()?,
            bit_length: config.bit_length,
        })
    }

    /// Create a range prover with existing generators (must match the verifier's generators)
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

    /// Bit length proofs are generated for
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Get the generator set used by this prover
    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    /// Prove that `value` lies in `[0, 2^bit_length)`.
    ///
    /// Returns the artifact and the value commitment `V`. Randomness is drawn
    /// from `rng` in a fixed order, so a seeded generator reproduces the
    /// artifact bit for bit.
    #[tracing::instrument(skip_all, name = "RangeProver::prove", fields(bit_length = self.bit_length))]
    pub fn prove<R, T>(
        &self,
        value: u64,
        rng: &mut R,
        transcript: &mut T,
    ) -> BulletproofsResult<(RangeProofArtifact, RistrettoPoint)>
    where
        R: RngCore + CryptoRng,
        T: TranscriptProtocol,
    {
        let n = self.bit_length;
        let gens = &*self.generators;

        if n < 64 && value >> n != 0 {
            return Err(BulletproofsError::RangeConstraintViolation { value, bits: n });
        }

        let value_scalar = Scalar::from(value);
        let powers_of_two = scalar_powers(&Scalar::from(2u64), n);

        let a_l = bit_decomposition(value, n);
        let a_r = vector_add_scalar(&a_l, &-Scalar::ONE);

        if hadamard_product(&a_l, &a_r)?.iter().any(|x| *x != Scalar::ZERO) {
            return Err(BulletproofsError::InternalInvariant(
                "bit vectors are not complementary".to_string(),
            ));
        }
        if inner_product(&a_l, &powers_of_two)? != value_scalar {
            return Err(BulletproofsError::InternalInvariant(
                "bit decomposition does not recompose to the value".to_string(),
            ));
        }

        let value_commitment = PedersenCommitment::new(value_scalar, rng);
        let v = value_commitment.commit(gens);

        let alpha = Scalar::random(&mut *rng);
        let s_l = random_scalar_vector(rng, n);
        let s_r = random_scalar_vector(rng, n);
        let rho = Scalar::random(&mut *rng);

        // A = α·H + <a_L, G> + <a_R, H>,  S = ρ·H + <s_L, G> + <s_R, H>
        let a = VectorCommitment::new(a_l.clone(), a_r.clone(), alpha)?.commit(&gens.h, &gens.g_vec, &gens.h_vec)?;
        let s = VectorCommitment::new(s_l.clone(), s_r.clone(), rho)?.commit(&gens.h, &gens.g_vec, &gens.h_vec)?;

        transcript.absorb(&[Message::Point(v), Message::Point(a), Message::Point(s)]);
        let yz = transcript.challenge_scalars(2);
        let (y, z) = (yz[0], yz[1]);
        if y == Scalar::ZERO {
            return Err(BulletproofsError::InternalInvariant("challenge y is zero".to_string()));
        }
        let z_sq = z * z;
        let y_powers = scalar_powers(&y, n);

        // l(X) = (a_L - z·1) + s_L·X
        let l0 = vector_add_scalar(&a_l, &-z);
        let l1 = s_l;

        // r(X) = y^n ∘ (a_R + z·1) + z²·2^n + (y^n ∘ s_R)·X
        let r0 = vector_add(
            &hadamard_product(&y_powers, &vector_add_scalar(&a_r, &z))?,
            &vector_scale(&powers_of_two, &z_sq),
        )?;
        let r1 = hadamard_product(&y_powers, &s_r)?;

        let t0 = inner_product(&l0, &r0)?;
        let t1 = inner_product(&l0, &r1)? + inner_product(&l1, &r0)?;
        let t2 = inner_product(&l1, &r1)?;

        let t1_commitment = PedersenCommitment::new(t1, rng);
        let t2_commitment = PedersenCommitment::new(t2, rng);
        let t1_point = t1_commitment.commit(gens);
        let t2_point = t2_commitment.commit(gens);

        transcript.absorb(&[Message::Point(t1_point), Message::Point(t2_point)]);
        let x = transcript.challenge_scalar();
        let x_sq = x * x;

        let mu = alpha + rho * x;
        let tau_x = PedersenCommitment::blinding_combination(&[
            (&t1_commitment, x),
            (&t2_commitment, x_sq),
            (&value_commitment, z_sq),
        ]);
        let lx = vector_add(&l0, &vector_scale(&l1, &x))?;
        let rx = vector_add(&r0, &vector_scale(&r1, &x))?;
        let t = t0 + t1 * x + t2 * x_sq;

        if t != inner_product(&lx, &rx)? {
            return Err(BulletproofsError::InternalInvariant(
                "t(x) does not match <l(x), r(x)>".to_string(),
            ));
        }

        transcript.absorb(&[Message::Scalar(tau_x), Message::Scalar(mu), Message::Scalar(t)]);
        let u = transcript.challenge_scalar();

        let h_prime = rescaled_h_vec(&gens.h_vec, &y);
        let ipa_prover = InnerProductProver::new(gens.g_vec.clone(), h_prime, gens.g * u)?;
        let ipa_proof = ipa_prover.prove(transcript, lx, rx)?;

        tracing::debug!(rounds = ipa_proof.num_rounds(), "range proof generated");

        let artifact = RangeProofArtifact {
            a: a.compress(),
            s: s.compress(),
            t1: t1_point.compress(),
            t2: t2_point.compress(),
            tau_x,
            mu,
            t,
            ipa_proof,
        };

        Ok((artifact, v))
    }
}
