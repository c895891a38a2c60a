//! # Domain Errors
//!
//! Error types for the chain storage subsystem.
//!
//! Integrity violations are not errors: validation reports them as data in
//! [`ChainValidationReport`](super::validation::ChainValidationReport).

use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// No block exists at this height.
    #[error("No block at height {height}")]
    HeightNotFound { height: u64 },

    /// The store could not be read or written. Fatal for the in-flight
    /// operation; retry policy belongs to the caller.
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// Stored bytes could not be encoded or decoded.
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    /// The target height was already occupied when the append tried to
    /// persist (append-only precondition failed).
    #[error("Height {height} already occupied; concurrent append detected")]
    HeightConflict { height: u64 },
}

impl StorageError {
    /// True for lookup misses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::HeightNotFound { .. })
    }
}

/// Key-value store errors.
#[derive(Debug, Clone, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },
    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

impl From<KVStoreError> for StorageError {
    fn from(err: KVStoreError) -> Self {
        StorageError::StoreUnavailable {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::SerializationError {
            message: err.to_string(),
        }
    }
}
