//! # Bulletproofs Core
//!
//! This crate provides the foundational pieces of the Bulletproofs range proof:
//!
//! - Group facade over Ristretto255 (encoding, decoding, sampling)
//! - Deterministic "nothing-up-my-sleeve" generator derivation and caching
//! - Scalar vector algebra
//! - Transcript management for the Fiat-Shamir transform
//! - Pedersen and generalized vector commitments
//! - Error types
//!
//! ## Mathematical Background
//!
//! Bulletproofs operate over a prime-order group with generators:
//! - `G`: base generator for committed values
//! - `H`: blinding generator
//! - `{G_i}`, `{H_i}`: per-index generators for vector commitments
//! - `U`: generator for the inner product term
//!
//! The central relation is a commitment to two vectors and their inner product:
//! ```text
//! P = <a, G> + <b, H> + <a, b>·U
//! ```

pub mod errors;
pub mod generators;
pub mod group;
pub mod pedersen;
pub mod transcript;
pub mod vector_commitment;
pub mod vectors;

pub use errors::*;
pub use generators::*;
pub use group::*;
pub use pedersen::*;
pub use transcript::*;
pub use vector_commitment::*;

/// Re-export commonly used types from curve25519-dalek
pub use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::{Identity, MultiscalarMul, VartimeMultiscalarMul},
};
