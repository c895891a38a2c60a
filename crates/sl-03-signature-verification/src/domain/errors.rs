//! # Signature Errors

use thiserror::Error;

/// Errors that can occur while checking a signed message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Signature is not valid base64
    #[error("Signature is not valid base64")]
    InvalidEncoding,

    /// Decoded signature is not 65 bytes
    #[error("Invalid signature length: {0} bytes")]
    InvalidLength(usize),

    /// Header byte outside 27..=34
    #[error("Invalid signature header byte: {0}")]
    InvalidHeader(u8),

    /// r or s is zero or out of range
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Failed to recover public key
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Address is not base58check or has the wrong payload size
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Recovered key hashes to a different address
    #[error("Signer does not match address")]
    AddressMismatch,
}
