//! # Inbound Port - RequestMempoolApi
//!
//! Driving port used by the API gateway and the append gate.
//!
//! | Method | Caller |
//! |--------|--------|
//! | `request_validation` | `POST /requestValidation` |
//! | `verify_and_grant` | `POST /message-signature/validate` |
//! | `has_grant`, `consume_grant`, `revoke_request` | append gate |
//! | `purge_expired` | runtime sweep task |

use crate::domain::entities::{MempoolEntry, ValidationRequestView, VerifiedRequest};
use crate::domain::errors::MempoolError;
use shared_types::Address;

/// Primary API for the request mempool.
pub trait RequestMempoolApi: Send + Sync {
    /// Opens a validation request for `address`, or returns the live one with
    /// its remaining window recomputed.
    ///
    /// # Errors
    /// - `InvalidInput`: empty address
    fn request_validation(&mut self, address: &str) -> Result<ValidationRequestView, MempoolError>;

    /// Live entry for `address`. Expired entries are purged and not returned.
    fn lookup(&mut self, address: &str) -> Option<MempoolEntry>;

    /// Verifies `signature` over the pending challenge and grants one append.
    ///
    /// The entry stays in the pool after success; the append gate revokes it.
    ///
    /// # Errors
    /// - `InvalidInput`: empty address or signature
    /// - `NoPendingRequest`: nothing live for the address
    /// - `Unverified`: signature rejected (entry kept)
    fn verify_and_grant(
        &mut self,
        address: &str,
        signature: &str,
    ) -> Result<VerifiedRequest, MempoolError>;

    fn has_grant(&self, address: &str) -> bool;

    /// Removes the grant. No-op if absent.
    fn consume_grant(&mut self, address: &str);

    /// Removes the pending entry. No-op if absent.
    fn revoke_request(&mut self, address: &str);

    /// Drops every expired entry and returns their addresses.
    fn purge_expired(&mut self) -> Vec<Address>;

    /// Entries as currently stored, windows computed for now.
    fn entries_snapshot(&self) -> Vec<ValidationRequestView>;

    /// Addresses currently holding a grant.
    fn grants_snapshot(&self) -> Vec<Address>;
}
