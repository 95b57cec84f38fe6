//! Scalar vector algebra
//!
//! All operations work on slices of field scalars; binary operations require
//! operands of equal length.

use crate::{BulletproofsError, BulletproofsResult};
use curve25519_dalek::scalar::Scalar;

fn check_lengths(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<()> {
    if a.len() != b.len() {
        return Err(BulletproofsError::VectorLengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Compute powers of a scalar: [1, x, x^2, x^3, ..., x^(n-1)]
pub fn scalar_powers(x: &Scalar, n: usize) -> Vec<Scalar> {
    let mut powers = Vec::with_capacity(n);
    let mut current = Scalar::ONE;

    for _ in 0..n {
        powers.push(current);
        current *= x;
    }

    powers
}

/// Compute the inner product of two scalar vectors
pub fn inner_product(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Scalar> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum())
}

/// Hadamard (element-wise) product of two scalar vectors
pub fn hadamard_product(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Vec<Scalar>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).collect())
}

/// Add two scalar vectors element-wise
pub fn vector_add(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Vec<Scalar>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai + bi).collect())
}

/// Subtract two scalar vectors element-wise: a - b
pub fn vector_sub(a: &[Scalar], b: &[Scalar]) -> BulletproofsResult<Vec<Scalar>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| ai - bi).collect())
}

/// Scale a vector by a scalar
pub fn vector_scale(vec: &[Scalar], scalar: &Scalar) -> Vec<Scalar> {
    vec.iter().map(|v| v * scalar).collect()
}

/// Add the same scalar to every element
pub fn vector_add_scalar(vec: &[Scalar], scalar: &Scalar) -> Vec<Scalar> {
    vec.iter().map(|v| v + scalar).collect()
}

/// Little-endian bit decomposition: `Σ bits[i]·2^i == value` when `value < 2^bits`.
///
/// Bits above position 63 are zero.
pub fn bit_decomposition(value: u64, bits: usize) -> Vec<Scalar> {
    (0..bits)
        .map(|i| {
            if i < 64 && (value >> i) & 1 == 1 {
                Scalar::ONE
            } else {
                Scalar::ZERO
            }
        })
        .collect()
}

/// Verify that a vector represents a valid bit decomposition
pub fn verify_bit_vector(bits: &[Scalar]) -> bool {
    bits.iter().all(|bit| *bit == Scalar::ZERO || *bit == Scalar::ONE)
}

/// Compute the value represented by a bit vector (little-endian)
pub fn bits_to_value(bits: &[Scalar]) -> Option<u64> {
    if !verify_bit_vector(bits) || bits.len() > 64 {
        return None;
    }

    let mut value = 0u64;
    for (i, bit) in bits.iter().enumerate() {
        if *bit == Scalar::ONE {
            value |= 1u64 << i;
        }
    }

    Some(value)
}

/// Check if a number is a power of 2
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && (n & (n - 1)) == 0
}
