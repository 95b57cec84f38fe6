//! Range proof structure and serialization

use bulletproofs_core::{
    group::{decode_point, decode_scalar, encode_scalar, POINT_SIZE, SCALAR_SIZE},
    BulletproofsError, BulletproofsResult, CompressedRistretto, RistrettoPoint, Scalar,
};
use ipa::InnerProductProof;
use serde::{Deserialize, Serialize};

const HEADER_POINTS: usize = 4;
const HEADER_SCALARS: usize = 3;

/// Size of the fixed part of the wire form: `A, S, T1, T2, tau_x, mu, t`
pub const HEADER_SIZE: usize = HEADER_POINTS * POINT_SIZE + HEADER_SCALARS * SCALAR_SIZE;

/// A proof that a committed value lies in `[0, 2^n)`.
///
/// The value commitment `V` is not part of the artifact; the verifier
/// receives it separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeProofArtifact {
    /// Commitment to the bit vectors `a_L`, `a_R`
    pub a: CompressedRistretto,
    /// Commitment to the blinding vectors `s_L`, `s_R`
    pub s: CompressedRistretto,
    /// Commitment to the linear coefficient of `t(X)`
    pub t1: CompressedRistretto,
    /// Commitment to the quadratic coefficient of `t(X)`
    pub t2: CompressedRistretto,
    /// Blinding factor for `t(x)`
    pub tau_x: Scalar,
    /// Aggregated blinding of `A` and `S`
    pub mu: Scalar,
    /// Evaluation `t(x) = <l(x), r(x)>`
    pub t: Scalar,
    /// Inner product argument for `<l(x), r(x)>`
    pub ipa_proof: InnerProductProof,
}

/// Decompressed header points of an artifact
pub(crate) struct ArtifactPoints {
    pub a: RistrettoPoint,
    pub s: RistrettoPoint,
    pub t1: RistrettoPoint,
    pub t2: RistrettoPoint,
}

impl RangeProofArtifact {
    /// Number of inner product rounds, `log_2(n)` for an honest proof
    pub fn num_rounds(&self) -> usize {
        self.ipa_proof.num_rounds()
    }

    pub(crate) fn decompress_points(&self) -> BulletproofsResult<ArtifactPoints> {
        Ok(ArtifactPoints {
            a: decode_point(&self.a)?,
            s: decode_point(&self.s)?,
            t1: decode_point(&self.t1)?,
            t2: decode_point(&self.t2)?,
        })
    }

    /// Get proof size in bytes
    pub fn size_bytes(&self) -> usize {
        HEADER_SIZE + self.ipa_proof.size_bytes()
    }

    /// Serialize as `A ‖ S ‖ T1 ‖ T2 ‖ tau_x ‖ mu ‖ t ‖ ipa_proof`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes());
        for point in [&self.a, &self.s, &self.t1, &self.t2] {
            bytes.extend_from_slice(point.as_bytes());
        }
        for scalar in [&self.tau_x, &self.mu, &self.t] {
            bytes.extend_from_slice(&encode_scalar(scalar));
        }
        bytes.extend_from_slice(&self.ipa_proof.to_bytes());
        bytes
    }

    /// Deserialize proof from bytes
    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(BulletproofsError::InvalidProof(format!(
                "Range proof needs at least {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let (points, rest) = bytes.split_at(HEADER_POINTS * POINT_SIZE);
        let (scalars, ipa_bytes) = rest.split_at(HEADER_SCALARS * SCALAR_SIZE);

        let points = points
            .chunks_exact(POINT_SIZE)
            .map(|chunk| {
                CompressedRistretto::from_slice(chunk)
                    .map_err(|_| BulletproofsError::InvalidProof("Invalid point bytes".to_string()))
            })
            .collect::<BulletproofsResult<Vec<_>>>()?;
        let scalars = scalars
            .chunks_exact(SCALAR_SIZE)
            .map(decode_scalar)
            .collect::<BulletproofsResult<Vec<_>>>()?;

        Ok(Self {
            a: points[0],
            s: points[1],
            t1: points[2],
            t2: points[3],
            tau_x: scalars[0],
            mu: scalars[1],
            t: scalars[2],
            ipa_proof: InnerProductProof::from_bytes(ipa_bytes)?,
        })
    }
}
