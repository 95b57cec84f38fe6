//! Inner Product Argument prover implementation

use crate::{validate_bases, InnerProductProof};
use bulletproofs_core::{
    vectors::inner_product, BulletproofsError, BulletproofsResult, Message, TranscriptProtocol,
    VectorCommitment,
};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar, traits::MultiscalarMul};

/// Inner Product Argument prover
#[derive(Debug, Clone)]
pub struct InnerProductProver {
    g_vec: Vec<RistrettoPoint>,
    h_vec: Vec<RistrettoPoint>,
    u: RistrettoPoint,
}

impl InnerProductProver {
    /// Create a new IPA prover over bases `G`, `H` and inner product generator `U`
    pub fn new(g_vec: Vec<RistrettoPoint>, h_vec: Vec<RistrettoPoint>, u: RistrettoPoint) -> BulletproofsResult<Self> {
        validate_bases(&g_vec, &h_vec)?;
        Ok(Self { g_vec, h_vec, u })
    }

    /// Vector length the prover is set up for
    pub fn vector_length(&self) -> usize {
        self.g_vec.len()
    }

    /// Create an inner product proof
    ///
    /// Proves knowledge of vectors `a` and `b` such that
    /// `P = <a, G> + <b, H> + <a, b>·U`. `P` is recomputed from the witness and
    /// absorbed round by round together with `L` and `R`.
    #[tracing::instrument(skip_all, name = "InnerProductProver::prove", fields(n = a.len()))]
    pub fn prove<T: TranscriptProtocol>(
        &self,
        transcript: &mut T,
        a: Vec<Scalar>,
        b: Vec<Scalar>,
    ) -> BulletproofsResult<InnerProductProof> {
        for witness in [&a, &b] {
            if witness.len() != self.vector_length() {
                return Err(BulletproofsError::VectorLengthMismatch {
                    expected: self.vector_length(),
                    actual: witness.len(),
                });
            }
        }

        let mut p = VectorCommitment::inner_product(a.clone(), b.clone())?.commit(&self.u, &self.g_vec, &self.h_vec)?;

        let rounds = self.vector_length().trailing_zeros() as usize;
        let mut l_vec = Vec::with_capacity(rounds);
        let mut r_vec = Vec::with_capacity(rounds);

        // Folding overwrites the left half of each buffer and truncates
        let mut a = a;
        let mut b = b;
        let mut g = self.g_vec.clone();
        let mut h = self.h_vec.clone();

        while a.len() > 1 {
            let m = a.len() / 2;

            let (a_l, a_r) = a.split_at(m);
            let (b_l, b_r) = b.split_at(m);
            let (g_l, g_r) = g.split_at(m);
            let (h_l, h_r) = h.split_at(m);

            let c_l = inner_product(a_l, b_r)?;
            let c_r = inner_product(a_r, b_l)?;

            // L = <a_L, G_R> + <b_R, H_L> + c_L·U
            let l = RistrettoPoint::multiscalar_mul(
                a_l.iter().chain(b_r.iter()).chain(std::iter::once(&c_l)),
                g_r.iter().chain(h_l.iter()).chain(std::iter::once(&self.u)),
            );

            // R = <a_R, G_L> + <b_L, H_R> + c_R·U
            let r = RistrettoPoint::multiscalar_mul(
                a_r.iter().chain(b_l.iter()).chain(std::iter::once(&c_r)),
                g_l.iter().chain(h_r.iter()).chain(std::iter::once(&self.u)),
            );

            transcript.absorb(&[Message::Point(l), Message::Point(r), Message::Point(p)]);
            let x = transcript.challenge_scalar();
            if x == Scalar::ZERO {
                return Err(BulletproofsError::InternalInvariant(
                    "inner product challenge is zero".to_string(),
                ));
            }
            let x_inv = x.invert();

            for i in 0..m {
                a[i] = a[i] * x + a[m + i] * x_inv;
                b[i] = b[i] * x_inv + b[m + i] * x;
                g[i] = RistrettoPoint::multiscalar_mul([x_inv, x], [g[i], g[m + i]]);
                h[i] = RistrettoPoint::multiscalar_mul([x, x_inv], [h[i], h[m + i]]);
            }
            a.truncate(m);
            b.truncate(m);
            g.truncate(m);
            h.truncate(m);

            p = RistrettoPoint::multiscalar_mul([Scalar::ONE, x * x, x_inv * x_inv], [p, l, r]);

            l_vec.push(l);
            r_vec.push(r);
        }

        tracing::trace!(rounds = l_vec.len(), "inner product proof complete");

        Ok(InnerProductProof::new(&l_vec, &r_vec, a[0], b[0]))
    }
}
