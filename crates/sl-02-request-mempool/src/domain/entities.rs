//! # Mempool Entities
//!
//! A pending validation request and the views handed back to callers.

use super::value_objects::MempoolConfig;
use serde::Serialize;
use shared_types::{Address, TimestampMs};

/// A pending validation request.
///
/// The deadline is fixed at creation and never extended by re-requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MempoolEntry {
    pub wallet_address: Address,
    /// Creation time in milliseconds.
    pub request_timestamp: TimestampMs,
    /// Challenge the client must sign.
    pub message: String,
    /// `request_timestamp + window`.
    pub expires_at: TimestampMs,
}

impl MempoolEntry {
    /// Creates a new entry stamped at `now`.
    pub fn new(wallet_address: Address, now: TimestampMs, config: &MempoolConfig) -> Self {
        let message = config.challenge_message(&wallet_address, now);
        Self {
            wallet_address,
            request_timestamp: now,
            message,
            expires_at: now.saturating_add(config.validation_window_ms),
        }
    }

    /// An entry is expired once no window remains.
    pub fn is_expired(&self, now: TimestampMs) -> bool {
        now >= self.expires_at
    }

    /// Milliseconds left before expiry, zero once expired.
    pub fn remaining_window_ms(&self, now: TimestampMs) -> u64 {
        self.expires_at.saturating_sub(now)
    }

    /// Snapshot of the entry with the window recomputed for `now`.
    pub fn view(&self, now: TimestampMs) -> ValidationRequestView {
        ValidationRequestView {
            wallet_address: self.wallet_address.clone(),
            request_timestamp: self.request_timestamp,
            message: self.message.clone(),
            validation_window: self.remaining_window_ms(now),
            request_timestamp_expire: self.expires_at,
        }
    }
}

/// Entry as returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequestView {
    pub wallet_address: Address,
    #[serde(rename = "requestTimeStamp")]
    pub request_timestamp: TimestampMs,
    pub message: String,
    /// Remaining window in milliseconds.
    pub validation_window: u64,
    #[serde(rename = "requestTimeStampExpire")]
    pub request_timestamp_expire: TimestampMs,
}

/// Result of a successful signature check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedRequest {
    pub request: ValidationRequestView,
    /// Always true; carried so callers can echo it back.
    pub message_signature: bool,
}
