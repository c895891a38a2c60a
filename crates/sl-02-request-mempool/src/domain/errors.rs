//! Mempool error types.

use shared_types::Address;
use thiserror::Error;

/// Errors returned by the request mempool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MempoolError {
    /// A required field was empty.
    #[error("{field} data is missing")]
    InvalidInput { field: &'static str },

    /// No live request exists for the address (never requested, or expired).
    #[error("no valid mempool object found for {address}")]
    NoPendingRequest { address: Address },

    /// The signature did not verify; the request stays pending.
    #[error("{reason}")]
    Unverified { reason: String },
}
