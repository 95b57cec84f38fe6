//! Inner Product Argument verifier implementation

use crate::{validate_bases, InnerProductProof};
use bulletproofs_core::{BulletproofsResult, Message, TranscriptProtocol};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar, traits::VartimeMultiscalarMul};

/// Inner Product Argument verifier
#[derive(Debug, Clone)]
pub struct InnerProductVerifier {
    g_vec: Vec<RistrettoPoint>,
    h_vec: Vec<RistrettoPoint>,
    u: RistrettoPoint,
}

impl InnerProductVerifier {
    /// Create a new IPA verifier over bases `G`, `H` and inner product generator `U`
    pub fn new(g_vec: Vec<RistrettoPoint>, h_vec: Vec<RistrettoPoint>, u: RistrettoPoint) -> BulletproofsResult<Self> {
        validate_bases(&g_vec, &h_vec)?;
        Ok(Self { g_vec, h_vec, u })
    }

    /// Vector length the verifier is set up for
    pub fn vector_length(&self) -> usize {
        self.g_vec.len()
    }

    /// Verify an inner product proof against the commitment `P`.
    ///
    /// Replays the prover's challenges from `transcript`, folds `P` with every
    /// `(L, R)` pair and checks `P' == a·G' + b·H' + (a·b)·U`. Malformed proofs
    /// verify to `false`.
    #[tracing::instrument(skip_all, name = "InnerProductVerifier::verify", fields(n = self.vector_length()))]
    pub fn verify<T: TranscriptProtocol>(
        &self,
        transcript: &mut T,
        proof: &InnerProductProof,
        p: &RistrettoPoint,
    ) -> bool {
        let expected_rounds = self.vector_length().trailing_zeros() as usize;
        if proof.validate_structure().is_err() || proof.num_rounds() != expected_rounds {
            tracing::debug!(
                expected_rounds,
                actual_rounds = proof.num_rounds(),
                "rejecting inner product proof with wrong shape"
            );
            return false;
        }

        let (l_vec, r_vec) = match (proof.decompress_l_vec(), proof.decompress_r_vec()) {
            (Ok(l_vec), Ok(r_vec)) => (l_vec, r_vec),
            _ => {
                tracing::debug!("rejecting inner product proof with undecodable points");
                return false;
            }
        };

        let mut challenges = Vec::with_capacity(expected_rounds);
        let mut challenges_inv = Vec::with_capacity(expected_rounds);
        let mut folded_p = *p;

        for (l, r) in l_vec.iter().zip(r_vec.iter()) {
            transcript.absorb(&[Message::Point(*l), Message::Point(*r), Message::Point(folded_p)]);
            let x = transcript.challenge_scalar();
            if x == Scalar::ZERO {
                tracing::debug!("rejecting inner product proof with zero challenge");
                return false;
            }
            let x_inv = x.invert();

            folded_p = RistrettoPoint::vartime_multiscalar_mul(
                [Scalar::ONE, x * x, x_inv * x_inv],
                [folded_p, *l, *r],
            );

            challenges.push(x);
            challenges_inv.push(x_inv);
        }

        let (s_g, s_h) = self.compute_s_scalars(&challenges, &challenges_inv);

        // a·G' + b·H' + (a·b)·U with G' = Σ s_g[i]·G_i and H' = Σ s_h[i]·H_i
        let expected = RistrettoPoint::vartime_multiscalar_mul(
            s_g.iter()
                .map(|s| proof.a * s)
                .chain(s_h.iter().map(|s| proof.b * s))
                .chain(std::iter::once(proof.a * proof.b)),
            self.g_vec.iter().chain(self.h_vec.iter()).chain(std::iter::once(&self.u)),
        );

        let valid = folded_p == expected;
        if !valid {
            tracing::debug!("inner product final equation failed");
        }
        valid
    }

    /// Per-index challenge products for the folded generators.
    ///
    /// Round `j` splits on bit `k - 1 - j` of the index; the right half of `G`
    /// is scaled by `x_j` and the left half by `x_j^{-1}`, mirrored for `H`.
    fn compute_s_scalars(&self, challenges: &[Scalar], challenges_inv: &[Scalar]) -> (Vec<Scalar>, Vec<Scalar>) {
        let n = self.vector_length();
        let mut s_g = vec![Scalar::ONE; n];
        let mut s_h = vec![Scalar::ONE; n];

        for (round, (x, x_inv)) in challenges.iter().zip(challenges_inv.iter()).enumerate() {
            let bit_position = challenges.len() - 1 - round;

            for i in 0..n {
                if (i >> bit_position) & 1 == 1 {
                    s_g[i] *= x;
                    s_h[i] *= x_inv;
                } else {
                    s_g[i] *= x_inv;
                    s_h[i] *= x;
                }
            }
        }

        (s_g, s_h)
    }
}
