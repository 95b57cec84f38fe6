//! Error types for Bulletproofs operations

use thiserror::Error;

/// Main error type for Bulletproofs operations.
///
/// These are construction and internal errors. A proof that fails to verify is
/// not an error: verifiers report that as a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BulletproofsError {
    /// Invalid proof format or structure
    #[error("Invalid proof format: {0}")]
    InvalidProof(String),

    /// Invalid parameters provided
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Vector length mismatch
    #[error("Vector length mismatch: expected {expected}, got {actual}")]
    VectorLengthMismatch { expected: usize, actual: usize },

    /// Insufficient generators
    #[error("Insufficient generators: need {needed}, have {available}")]
    InsufficientGenerators { needed: usize, available: usize },

    /// Bit length outside the supported set
    #[error("Unsupported bit length {bits}: must be one of 2, 4, 8, 16, 32, 64")]
    UnsupportedBitLength { bits: usize },

    /// Scalar encoding is not reduced modulo the group order
    #[error("Scalar encoding is not canonical")]
    NonCanonicalScalar,

    /// Point encoding does not decode to a group element
    #[error("Invalid point encoding")]
    InvalidPoint,

    /// No valid group element found while deriving a generator
    #[error("Generator derivation exhausted for index {index} after {attempts} attempts")]
    GeneratorDerivationExhausted { index: u64, attempts: u32 },

    /// Prover-side invariant broken; the proof would be unsound
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    /// Operation not allowed in the current session state
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    /// Range constraint violation
    #[error("Value {value} is not in range [0, 2^{bits})")]
    RangeConstraintViolation { value: u64, bits: usize },
}

/// Result type for Bulletproofs operations
pub type BulletproofsResult<T> = Result<T, BulletproofsError>;
