//! Deterministic generator derivation and the process-wide generator cache
//!
//! Every generator except the base point is a "nothing-up-my-sleeve" point:
//! the first valid Ristretto encoding found by hashing a public seed, the
//! generator index, and an attempt counter. Prover and verifier derive
//! identical sets from the same seed, so generators never travel with proofs.

use crate::{BulletproofsError, BulletproofsResult, VectorCommitment};
use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_POINT,
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::Identity,
};
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Seed used when the caller does not configure one
pub const DEFAULT_GENERATOR_SEED: &[u8] = b"bulletproofs-rangeproof-nums-v1";

/// Upper bound on hash attempts per generator
pub const MAX_DERIVATION_ATTEMPTS: u32 = 256;

/// Index of the inner product generator `U`
pub const U_GENERATOR_INDEX: u64 = 0;

/// Index of the Pedersen blinding generator `H`, outside every vector range
pub const BLINDING_GENERATOR_INDEX: u64 = u64::MAX;

type CacheKey = (Vec<u8>, usize);

static GENERATOR_CACHE: Lazy<Mutex<HashMap<CacheKey, Arc<GeneratorSet>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Derive the generator for `(seed, index)` by try-and-increment.
pub fn derive_generator(seed: &[u8], index: u64) -> BulletproofsResult<RistrettoPoint> {
    for counter in 0..MAX_DERIVATION_ATTEMPTS {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        hasher.update(index.to_be_bytes());
        hasher.update(counter.to_be_bytes());
        let candidate = CompressedRistretto(hasher.finalize().into());

        if let Some(point) = candidate.decompress() {
            if point != RistrettoPoint::identity() {
                return Ok(point);
            }
        }
    }

    Err(BulletproofsError::GeneratorDerivationExhausted {
        index,
        attempts: MAX_DERIVATION_ATTEMPTS,
    })
}

/// Generator set for Bulletproofs operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSet {
    /// Base generator G, the value generator of Pedersen commitments
    pub g: RistrettoPoint,
    /// Blinding generator H
    pub h: RistrettoPoint,
    /// Vector generators for the left vector
    pub g_vec: Vec<RistrettoPoint>,
    /// Vector generators for the right vector
    pub h_vec: Vec<RistrettoPoint>,
    /// Generator for the inner product term
    pub u: RistrettoPoint,
}

impl GeneratorSet {
    /// Derive a generator set with `vector_length` generators per side.
    ///
    /// Layout: `U = NUMS(0)`, `G_i = NUMS(1 + i)`, `H_i = NUMS(1 + n + i)`,
    /// `H = NUMS(u64::MAX)`, and `G` is the Ristretto basepoint.
    pub fn new(seed: &[u8], vector_length: usize) -> BulletproofsResult<Self> {
        if vector_length == 0 {
            return Err(BulletproofsError::InvalidParameters(
                "Generator set cannot be empty".to_string(),
            ));
        }

        let n = vector_length as u64;
        let u = derive_generator(seed, U_GENERATOR_INDEX)?;
        let h = derive_generator(seed, BLINDING_GENERATOR_INDEX)?;
        let g_vec = (0..n)
            .map(|i| derive_generator(seed, 1 + i))
            .collect::<BulletproofsResult<Vec<_>>>()?;
        let h_vec = (0..n)
            .map(|i| derive_generator(seed, 1 + n + i))
            .collect::<BulletproofsResult<Vec<_>>>()?;

        tracing::debug!(vector_length, "derived generator set");

        Ok(Self {
            g: RISTRETTO_BASEPOINT_POINT,
            h,
            g_vec,
            h_vec,
            u,
        })
    }

    /// Fetch the shared generator set for `(seed, vector_length)`, deriving it on first use.
    pub fn cached(seed: &[u8], vector_length: usize) -> BulletproofsResult<Arc<Self>> {
        let key = (seed.to_vec(), vector_length);
        if let Some(generators) = Self::lock_cache().get(&key) {
            return Ok(Arc::clone(generators));
        }

        // Derive without holding the lock; a concurrent first use keeps whichever set lands first
        let derived = Arc::new(Self::new(seed, vector_length)?);
        let mut cache = Self::lock_cache();
        Ok(Arc::clone(cache.entry(key).or_insert(derived)))
    }

    fn lock_cache() -> MutexGuard<'static, HashMap<CacheKey, Arc<GeneratorSet>>> {
        GENERATOR_CACHE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the vector length
    pub fn vector_length(&self) -> usize {
        self.g_vec.len()
    }

    /// Get a slice of the G vector generators
    pub fn g_vec(&self) -> &[RistrettoPoint] {
        &self.g_vec
    }

    /// Get a slice of the H vector generators
    pub fn h_vec(&self) -> &[RistrettoPoint] {
        &self.h_vec
    }

    /// Compute the inner product commitment `<a, G> + <b, H> + <a, b>·U`
    pub fn inner_product_commit(&self, a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<RistrettoPoint> {
        VectorCommitment::inner_product(a.to_vec(), b.to_vec())?.commit(&self.u, &self.g_vec, &self.h_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::traits::MultiscalarMul;
    use std::collections::HashSet;

    #[test]
    fn test_generator_set_creation() {
        let generators = GeneratorSet::new(DEFAULT_GENERATOR_SEED, 8).unwrap();
        assert_eq!(generators.vector_length(), 8);
        assert_eq!(generators.g_vec.len(), 8);
        assert_eq!(generators.h_vec.len(), 8);
        assert_eq!(generators.g, RISTRETTO_BASEPOINT_POINT);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = derive_generator(b"seed", 5).unwrap();
        let b = derive_generator(b"seed", 5).unwrap();
        assert_eq!(a, b);

        let other_seed = derive_generator(b"other seed", 5).unwrap();
        let other_index = derive_generator(b"seed", 6).unwrap();
        assert_ne!(a, other_seed);
        assert_ne!(a, other_index);
    }

    #[test]
    fn test_generators_are_distinct() {
        let generators = GeneratorSet::new(DEFAULT_GENERATOR_SEED, 16).unwrap();
        let mut seen = HashSet::new();
        let distinguished = [generators.g, generators.h, generators.u];
        let all = generators
            .g_vec
            .iter()
            .chain(generators.h_vec.iter())
            .chain(distinguished.iter());

        for point in all {
            assert!(seen.insert(point.compress().to_bytes()));
        }
        assert_eq!(seen.len(), 35);
    }

    #[test]
    fn test_layout_matches_indices() {
        let generators = GeneratorSet::new(DEFAULT_GENERATOR_SEED, 4).unwrap();
        assert_eq!(generators.u, derive_generator(DEFAULT_GENERATOR_SEED, 0).unwrap());
        assert_eq!(generators.g_vec[0], derive_generator(DEFAULT_GENERATOR_SEED, 1).unwrap());
        assert_eq!(generators.h_vec[0], derive_generator(DEFAULT_GENERATOR_SEED, 5).unwrap());
        assert_eq!(generators.h, derive_generator(DEFAULT_GENERATOR_SEED, u64::MAX).unwrap());
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(GeneratorSet::new(DEFAULT_GENERATOR_SEED, 0).is_err());
    }

    #[test]
    fn test_cache_shares_sets() {
        let first = GeneratorSet::cached(DEFAULT_GENERATOR_SEED, 4).unwrap();
        let second = GeneratorSet::cached(DEFAULT_GENERATOR_SEED, 4).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let other = GeneratorSet::cached(b"another seed", 4).unwrap();
        assert_ne!(first.g_vec, other.g_vec);
    }

    #[test]
    fn test_concurrent_first_use_shares_one_set() {
        let seed: &[u8] = b"concurrent first use";
        let sets: Vec<Arc<GeneratorSet>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| GeneratorSet::cached(seed, 32).unwrap()))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        let cached = GeneratorSet::cached(seed, 32).unwrap();
        for set in &sets {
            assert_eq!(**set, *cached);
        }
        assert!(sets.iter().any(|set| Arc::ptr_eq(set, &cached)));
    }

    #[test]
    fn test_inner_product_commit() {
        let generators = GeneratorSet::new(DEFAULT_GENERATOR_SEED, 2).unwrap();
        let a = vec![Scalar::from(3u64), Scalar::from(4u64)];
        let b = vec![Scalar::from(5u64), Scalar::from(6u64)];

        let commitment = generators.inner_product_commit(&a, &b).unwrap();

        // g_0*3 + g_1*4 + h_0*5 + h_1*6 + u*(3*5 + 4*6)
        let expected = RistrettoPoint::multiscalar_mul(
            [Scalar::from(3u64), Scalar::from(4u64), Scalar::from(5u64), Scalar::from(6u64), Scalar::from(39u64)],
            [generators.g_vec[0], generators.g_vec[1], generators.h_vec[0], generators.h_vec[1], generators.u],
        );

        assert_eq!(commitment, expected);
    }
}
