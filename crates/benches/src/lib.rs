//! Benchmarks for the Bulletproofs range proof crates
//!
//! - Range proof generation, verification and batch verification
//! - Inner product argument proving and verification
//! - Generator derivation
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench -p benches
//! ```
//!
//! Or run specific benchmarks:
//! ```bash
//! cargo bench -p benches --bench range_proof
//! cargo bench -p benches --bench ipa
//! ```

use bulletproofs_core::Scalar;
use rand::{rngs::StdRng, SeedableRng};

/// Deterministic random vectors for repeatable benchmark inputs
pub fn random_vectors(n: usize, seed: u64) -> (Vec<Scalar>, Vec<Scalar>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = (0..n).map(|_| Scalar::random(&mut rng)).collect();
    let b = (0..n).map(|_| Scalar::random(&mut rng)).collect();
    (a, b)
}

/// A value near the top of `[0, 2^bits)`
pub fn near_max_value(bits: usize) -> u64 {
    if bits >= 64 {
        u64::MAX - 1
    } else {
        (1u64 << bits) - 2
    }
}
