use thiserror::Error;

use crate::core::Key;

// Unified error type for graphpc

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KError {
    #[error("unknown preconditioner kernel: {0:?}")]
    UnknownKernel(String),
    #[error("unknown preconditioner verbosity: {0:?}")]
    UnknownVerbosity(String),
    #[error("unsupported kernel: {0}")]
    UnsupportedKernel(&'static str),
    #[error("preconditioner used before build")]
    NotBuilt,
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("key {0} is not known to the key info")]
    UnknownKey(Key),
    #[error("factor block for key {key} is {rows}x{cols}, expected {expected}x{expected}")]
    BlockShape { key: Key, expected: usize, rows: usize, cols: usize },
    #[error("damping vector for key {key} has length {actual}, expected {expected}")]
    DampingLength { key: Key, expected: usize, actual: usize },
    #[error("diagonal block of key {key} is not positive definite (pivot {pivot})")]
    NotPositiveDefinite { key: Key, pivot: usize },
    #[error("key {0} appears more than once in the key info")]
    DuplicateKey(Key),
}

/// Coarse classification of [`KError`], matching how callers react to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad kernel/verbosity name, or a kernel with no implementation.
    Configuration,
    /// Operator used out of order or with inconsistent inputs.
    Precondition,
    /// A damped diagonal block could not be Cholesky-factorized.
    Factorization,
}

impl KError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KError::UnknownKernel(_) | KError::UnknownVerbosity(_) | KError::UnsupportedKernel(_) => {
                ErrorKind::Configuration
            }
            KError::NotPositiveDefinite { .. } => ErrorKind::Factorization,
            KError::NotBuilt
            | KError::DimensionMismatch { .. }
            | KError::UnknownKey(_)
            | KError::BlockShape { .. }
            | KError::DampingLength { .. }
            | KError::DuplicateKey(_) => ErrorKind::Precondition,
        }
    }
}
