//! Group operations and encodings
//!
//! Thin facade over Ristretto255. Points travel as 32-byte compressed
//! encodings; scalars travel as fixed-width 32-byte big-endian integers.

use crate::{BulletproofsError, BulletproofsResult};
use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::Identity,
};
use rand_core::{CryptoRng, RngCore};

/// Width in bytes of an encoded point
pub const POINT_SIZE: usize = 32;

/// Width in bytes of an encoded scalar
pub const SCALAR_SIZE: usize = 32;

/// Encode a point in compressed form
pub fn encode_point(point: &RistrettoPoint) -> [u8; POINT_SIZE] {
    point.compress().to_bytes()
}

/// Decode a compressed point
pub fn decode_point(compressed: &CompressedRistretto) -> BulletproofsResult<RistrettoPoint> {
    compressed.decompress().ok_or(BulletproofsError::InvalidPoint)
}

/// Decode a point from a byte slice of exactly [`POINT_SIZE`] bytes
pub fn decode_point_bytes(bytes: &[u8]) -> BulletproofsResult<RistrettoPoint> {
    let compressed =
        CompressedRistretto::from_slice(bytes).map_err(|_| BulletproofsError::InvalidPoint)?;
    decode_point(&compressed)
}

/// Check whether `bytes` is the encoding of a group element
pub fn is_valid_point(bytes: &[u8]) -> bool {
    decode_point_bytes(bytes).is_ok()
}

/// Encode a scalar as 32 big-endian bytes
pub fn encode_scalar(scalar: &Scalar) -> [u8; SCALAR_SIZE] {
    let mut bytes = scalar.to_bytes();
    bytes.reverse();
    bytes
}

/// Decode a big-endian scalar, rejecting values not reduced modulo the group order
pub fn decode_scalar(bytes: &[u8]) -> BulletproofsResult<Scalar> {
    let mut le: [u8; SCALAR_SIZE] = bytes
        .try_into()
        .map_err(|_| BulletproofsError::NonCanonicalScalar)?;
    le.reverse();
    Option::from(Scalar::from_canonical_bytes(le)).ok_or(BulletproofsError::NonCanonicalScalar)
}

/// Interpret a 32-byte digest as a big-endian integer reduced modulo the group order
pub fn scalar_from_digest(digest: [u8; 32]) -> Scalar {
    let mut le = digest;
    le.reverse();
    Scalar::from_bytes_mod_order(le)
}

/// Sample a uniformly random scalar
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    Scalar::random(rng)
}

/// Sample a vector of `n` uniformly random scalars
pub fn random_scalar_vector<R: RngCore + CryptoRng>(rng: &mut R, n: usize) -> Vec<Scalar> {
    (0..n).map(|_| Scalar::random(&mut *rng)).collect()
}

/// Whether `point` is the group identity
pub fn is_identity(point: &RistrettoPoint) -> bool {
    *point == RistrettoPoint::identity()
}
