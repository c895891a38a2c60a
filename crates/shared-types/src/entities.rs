//! # Core Entities
//!
//! Identity and timestamp aliases shared across subsystems.

/// Wallet address claimed by a client (base58check P2PKH string).
pub type Address = String;

/// Milliseconds since UNIX epoch.
pub type TimestampMs = u64;

/// Seconds since UNIX epoch.
pub type TimestampSecs = u64;

/// Returns true if the address is usable as a mempool/grant key.
///
/// Only emptiness (after trimming) is rejected here; format checks belong to
/// the signature verifier.
pub fn is_valid_address(address: &str) -> bool {
    !address.trim().is_empty()
}
