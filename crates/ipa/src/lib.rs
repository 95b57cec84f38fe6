//! # Inner Product Argument (IPA)
//!
//! This crate implements the inner product argument, the logarithmic-size core
//! of Bulletproofs. The IPA proves knowledge of vectors `a` and `b` such that:
//!
//! ```text
//! P = <a, G> + <b, H> + <a, b>·U
//! ```
//!
//! ## Mathematical Background
//!
//! The inner product argument uses a recursive folding approach:
//!
//! 1. **Base Case**: For vectors of length 1, the proof is just the values `a` and `b`.
//!
//! 2. **Recursive Case**: For vectors of length `n > 1`:
//!    - Split vectors: `a = (a_L, a_R)`, `b = (b_L, b_R)`
//!    - Compute cross terms:
//!      - `L = <a_L, G_R> + <b_R, H_L> + <a_L, b_R>·U`
//!      - `R = <a_R, G_L> + <b_L, H_R> + <a_R, b_L>·U`
//!    - Absorb `(L, R, P)` and draw the challenge `x`
//!    - Fold vectors:
//!      - `a' = a_L·x + a_R·x^{-1}`
//!      - `b' = b_L·x^{-1} + b_R·x`
//!    - Fold generators:
//!      - `G' = G_L·x^{-1} + G_R·x`
//!      - `H' = H_L·x + H_R·x^{-1}`
//!    - Continue with `P' = P + x²·L + x^{-2}·R`
//!
//! The proof consists of the L and R values from each folding round plus the
//! final scalars. The transcript passed to prover and verifier is a
//! continuation of whatever protocol runs around the argument.

pub mod proof;
pub mod prover;
pub mod verifier;

pub use proof::*;
pub use prover::*;
pub use verifier::*;

use bulletproofs_core::{vectors::is_power_of_two, BulletproofsError, BulletproofsResult, RistrettoPoint};

/// Check that `G` and `H` bases have the same non-zero power-of-two length
pub(crate) fn validate_bases(g_vec: &[RistrettoPoint], h_vec: &[RistrettoPoint]) -> BulletproofsResult<()> {
    if g_vec.len() != h_vec.len() {
        return Err(BulletproofsError::VectorLengthMismatch {
            expected: g_vec.len(),
            actual: h_vec.len(),
        });
    }
    if !is_power_of_two(g_vec.len()) {
        return Err(BulletproofsError::InvalidParameters(format!(
            "Vector length must be a non-zero power of two, got {}",
            g_vec.len()
        )));
    }
    Ok(())
}
