//! Generalized Pedersen commitments to a pair of vectors

use crate::{vectors, BulletproofsError, BulletproofsResult};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar, traits::MultiscalarMul};

/// Commitment state `P = c·U + <a, G> + <b, H>`.
///
/// `c` is either the inner product `<a, b>` or an independent blinding scalar,
/// in which case `U` is the blinding generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorCommitment {
    a: Vec<Scalar>,
    b: Vec<Scalar>,
    c: Scalar,
}

impl VectorCommitment {
    /// Create a commitment state over `a`, `b` with scalar `c`
    pub fn new(a: Vec<Scalar>, b: Vec<Scalar>, c: Scalar) -> BulletproofsResult<Self> {
        if a.len() != b.len() {
            return Err(BulletproofsError::VectorLengthMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }
        Ok(Self { a, b, c })
    }

    /// Create a commitment state whose scalar is the inner product `<a, b>`
    pub fn inner_product(a: Vec<Scalar>, b: Vec<Scalar>) -> BulletproofsResult<Self> {
        let c = vectors::inner_product(&a, &b)?;
        Ok(Self { a, b, c })
    }

    /// Vector length
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Whether the committed vectors are empty
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// The commitment scalar `c`
    pub fn scalar(&self) -> &Scalar {
        &self.c
    }

    /// Compute `c·U + Σ a_i·G_i + Σ b_i·H_i`
    pub fn commit(
        &self,
        u: &RistrettoPoint,
        g_vec: &[RistrettoPoint],
        h_vec: &[RistrettoPoint],
    ) -> BulletproofsResult<RistrettoPoint> {
        for bases in [g_vec, h_vec] {
            if bases.len() != self.len() {
                return Err(BulletproofsError::VectorLengthMismatch {
                    expected: self.len(),
                    actual: bases.len(),
                });
            }
        }

        let scalars = std::iter::once(&self.c).chain(self.a.iter()).chain(self.b.iter());
        let points = std::iter::once(u).chain(g_vec.iter()).chain(h_vec.iter());

        Ok(RistrettoPoint::multiscalar_mul(scalars, points))
    }
}
