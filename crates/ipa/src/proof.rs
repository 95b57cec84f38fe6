//! Inner Product Argument proof structure

use bulletproofs_core::{
    group::{decode_point, decode_scalar, encode_scalar, POINT_SIZE, SCALAR_SIZE},
    BulletproofsError, BulletproofsResult,
};
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
};
use serde::{Deserialize, Serialize};

/// An inner product argument proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerProductProof {
    /// L values from each folding round (log_2(n) elements)
    pub l_vec: Vec<CompressedRistretto>,
    /// R values from each folding round (log_2(n) elements)
    pub r_vec: Vec<CompressedRistretto>,
    /// Final scalar value a
    pub a: Scalar,
    /// Final scalar value b
    pub b: Scalar,
}

impl InnerProductProof {
    /// Create a new inner product proof
    pub fn new(l_vec: &[RistrettoPoint], r_vec: &[RistrettoPoint], a: Scalar, b: Scalar) -> Self {
        Self {
            l_vec: l_vec.iter().map(|p| p.compress()).collect(),
            r_vec: r_vec.iter().map(|p| p.compress()).collect(),
            a,
            b,
        }
    }

    /// Get the number of folding rounds
    pub fn num_rounds(&self) -> usize {
        self.l_vec.len()
    }

    /// Validate proof structure
    pub fn validate_structure(&self) -> BulletproofsResult<()> {
        if self.l_vec.len() != self.r_vec.len() {
            return Err(BulletproofsError::InvalidProof(
                "L and R vectors must have the same length".to_string(),
            ));
        }

        // Empty L/R vectors are valid for the base case (vector length 1)
        Ok(())
    }

    /// Decompress L values
    pub fn decompress_l_vec(&self) -> BulletproofsResult<Vec<RistrettoPoint>> {
        self.l_vec.iter().map(decode_point).collect()
    }

    /// Decompress R values
    pub fn decompress_r_vec(&self) -> BulletproofsResult<Vec<RistrettoPoint>> {
        self.r_vec.iter().map(decode_point).collect()
    }

    /// Get proof size in bytes
    pub fn size_bytes(&self) -> usize {
        (self.l_vec.len() + self.r_vec.len()) * POINT_SIZE + 2 * SCALAR_SIZE
    }

    /// Serialize as `L_0..L_k ‖ R_0..R_k ‖ a ‖ b`, 32 bytes per element
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.size_bytes());

        for point in self.l_vec.iter().chain(self.r_vec.iter()) {
            result.extend_from_slice(point.as_bytes());
        }
        result.extend_from_slice(&encode_scalar(&self.a));
        result.extend_from_slice(&encode_scalar(&self.b));

        result
    }

    /// Deserialize proof from bytes; the round count is implied by the length
    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        let scalars_len = 2 * SCALAR_SIZE;
        let round_len = 2 * POINT_SIZE;
        if bytes.len() < scalars_len || (bytes.len() - scalars_len) % round_len != 0 {
            return Err(BulletproofsError::InvalidProof(format!(
                "Invalid inner product proof size: {} bytes",
                bytes.len()
            )));
        }

        let num_rounds = (bytes.len() - scalars_len) / round_len;
        let mut chunks = bytes.chunks_exact(POINT_SIZE);
        let mut read_points = |count: usize| -> BulletproofsResult<Vec<CompressedRistretto>> {
            (0..count)
                .map(|_| {
                    let chunk = chunks.next().ok_or_else(|| {
                        BulletproofsError::InvalidProof("Truncated point data".to_string())
                    })?;
                    CompressedRistretto::from_slice(chunk)
                        .map_err(|_| BulletproofsError::InvalidProof("Invalid point bytes".to_string()))
                })
                .collect()
        };

        let l_vec = read_points(num_rounds)?;
        let r_vec = read_points(num_rounds)?;

        let scalar_offset = bytes.len() - scalars_len;
        let a = decode_scalar(&bytes[scalar_offset..scalar_offset + SCALAR_SIZE])?;
        let b = decode_scalar(&bytes[scalar_offset + SCALAR_SIZE..])?;

        Ok(Self { l_vec, r_vec, a, b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::{constants::RISTRETTO_BASEPOINT_POINT, traits::Identity};

    #[test]
    fn test_proof_creation() {
        let l_vec = vec![RistrettoPoint::identity()];
        let r_vec = vec![RistrettoPoint::identity()];
        let a = Scalar::from(42u64);
        let b = Scalar::from(37u64);

        let proof = InnerProductProof::new(&l_vec, &r_vec, a, b);

        assert_eq!(proof.num_rounds(), 1);
        assert_eq!(proof.a, a);
        assert_eq!(proof.b, b);
    }

    #[test]
    fn test_invalid_proof_structure() {
        // Mismatched L and R vector lengths
        let proof = InnerProductProof {
            l_vec: vec![CompressedRistretto::default()],
            r_vec: vec![],
            a: Scalar::from(1u64),
            b: Scalar::from(2u64),
        };

        assert!(proof.validate_structure().is_err());
    }

    #[test]
    fn test_proof_size() {
        let l_vec = vec![RistrettoPoint::identity(); 3];
        let r_vec = vec![RistrettoPoint::identity(); 3];
        let proof = InnerProductProof::new(&l_vec, &r_vec, Scalar::from(1u64), Scalar::from(2u64));

        // 3 L values + 3 R values + 2 scalars = 6*32 + 64 = 256 bytes
        assert_eq!(proof.size_bytes(), 256);
        assert_eq!(proof.to_bytes().len(), 256);
    }

    #[test]
    fn test_bytes_preserve_order() {
        let l_vec = vec![RISTRETTO_BASEPOINT_POINT, RISTRETTO_BASEPOINT_POINT * Scalar::from(2u64)];
        let r_vec = vec![RISTRETTO_BASEPOINT_POINT * Scalar::from(3u64), RISTRETTO_BASEPOINT_POINT * Scalar::from(4u64)];
        let proof = InnerProductProof::new(&l_vec, &r_vec, Scalar::from(5u64), Scalar::from(6u64));

        let parsed = InnerProductProof::from_bytes(&proof.to_bytes()).unwrap();
        assert_eq!(parsed, proof);
        assert_eq!(parsed.decompress_r_vec().unwrap(), r_vec);
    }

    #[test]
    fn test_from_bytes_rejects_bad_lengths() {
        assert!(InnerProductProof::from_bytes(&[0u8; 63]).is_err());
        assert!(InnerProductProof::from_bytes(&[0u8; 64 + 32]).is_err());
        assert!(InnerProductProof::from_bytes(&[0u8; 64]).is_ok());
    }

    #[test]
    fn test_from_bytes_rejects_non_canonical_scalar() {
        let mut bytes = InnerProductProof::new(&[], &[], Scalar::ONE, Scalar::ONE).to_bytes();
        bytes[..32].copy_from_slice(&[0xff; 32]);
        assert_eq!(
            InnerProductProof::from_bytes(&bytes),
            Err(BulletproofsError::NonCanonicalScalar)
        );
    }
}
