//! # Bulletproofs Range Proofs
//!
//! This crate implements range proofs using the inner product argument.
//! Range proofs allow proving that a committed value lies within `[0, 2^n)`
//! without revealing the value.
//!
//! ## Mathematical Background
//!
//! A range proof for value `v` in range `[0, 2^n)` works by:
//!
//! 1. **Bit Decomposition**: Express `v = Σ(a_L[i] * 2^i)` and set `a_R = a_L - 1`
//! 2. **Vector Commitment**: Commit to `(a_L, a_R)` and to blinding vectors `(s_L, s_R)`
//! 3. **Polynomial Reduction**: Challenges `y, z` fold the constraints
//!    `a_L ∘ a_R = 0`, `a_L - a_R = 1` and `<a_L, 2^n> = v` into
//!    `t(X) = <l(X), r(X)>`, whose coefficients are committed as `T1`, `T2`
//! 4. **Inner Product Argument**: After challenge `x`, prove `t = <l(x), r(x)>`
//!    in `O(log n)` group elements
//!
//! ## Usage
//!
//! ```rust,no_run
//! use range::{RangeProof, RangeProofConfig};
//! use rand::thread_rng;
//!
//! let config = RangeProofConfig::with_bit_length(8);
//!
//! let mut prover = RangeProof::new(&config).unwrap();
//! let (artifact, commitment) = prover.generate_proof(42, &mut thread_rng()).unwrap();
//!
//! let mut verifier = RangeProof::new(&config).unwrap();
//! assert!(verifier.verify(&artifact, &commitment).unwrap().is_verified());
//! ```

pub mod config;
pub mod proof;
pub mod prover;
pub mod session;
pub mod verifier;


pub use config::*;
pub use proof::*;
pub use prover::*;
pub use session::*;
pub use verifier::*;

use bulletproofs_core::{vectors::scalar_powers, RistrettoPoint, Scalar};

/// `H'_i = y^{-i}·H_i`, compensating for the `y^n` factor folded into `r(X)`
pub(crate) fn rescaled_h_vec(h_vec: &[RistrettoPoint], y: &Scalar) -> Vec<RistrettoPoint> {
    let y_inv_powers = scalar_powers(&y.invert(), h_vec.len());
    h_vec
        .iter()
        .zip(y_inv_powers.iter())
        .map(|(h, y_inv)| h * y_inv)
        .collect()
}
