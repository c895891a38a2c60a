//! # Request Mempool Service
//!
//! Binds the pure `RequestPool` to a clock and a signature verifier and
//! implements `RequestMempoolApi`. Callers wrap the service in a mutex; every
//! mutating method takes `&mut self`.

#[cfg(test)]
mod tests;

use crate::domain::entities::{MempoolEntry, ValidationRequestView, VerifiedRequest};
use crate::domain::errors::MempoolError;
use crate::domain::pool::RequestPool;
use crate::domain::value_objects::MempoolConfig;
use crate::ports::inbound::RequestMempoolApi;
use crate::ports::outbound::SignatureVerifier;
use shared_types::{is_valid_address, Address, TimeSource};

const UNVERIFIED_REASON: &str = "invalid/unverified message";

/// Dependencies for RequestMempoolService
pub struct RequestMempoolDependencies<SV, TS> {
    pub verifier: SV,
    pub time_source: TS,
}

/// The Request Mempool Service.
pub struct RequestMempoolService<SV, TS>
where
    SV: SignatureVerifier,
    TS: TimeSource,
{
    pool: RequestPool,
    verifier: SV,
    time_source: TS,
}

impl<SV, TS> RequestMempoolService<SV, TS>
where
    SV: SignatureVerifier,
    TS: TimeSource,
{
    pub fn new(deps: RequestMempoolDependencies<SV, TS>, config: MempoolConfig) -> Self {
        Self {
            pool: RequestPool::new(config),
            verifier: deps.verifier,
            time_source: deps.time_source,
        }
    }

    pub fn config(&self) -> &MempoolConfig {
        self.pool.config()
    }
}

impl<SV, TS> RequestMempoolApi for RequestMempoolService<SV, TS>
where
    SV: SignatureVerifier,
    TS: TimeSource,
{
    fn request_validation(&mut self, address: &str) -> Result<ValidationRequestView, MempoolError> {
        if !is_valid_address(address) {
            return Err(MempoolError::InvalidInput { field: "address" });
        }

        let now = self.time_source.now_millis();
        let (entry, created) = self.pool.insert_or_get(address, now);
        if created {
            tracing::info!(
                "[sl-02] 📝 Validation request for {} open until {}",
                address,
                entry.expires_at
            );
        } else {
            tracing::debug!("[sl-02] Returning live request for {}", address);
        }

        Ok(entry.view(now))
    }

    fn lookup(&mut self, address: &str) -> Option<MempoolEntry> {
        let now = self.time_source.now_millis();
        self.pool.live_entry(address, now).cloned()
    }

    fn verify_and_grant(
        &mut self,
        address: &str,
        signature: &str,
    ) -> Result<VerifiedRequest, MempoolError> {
        if !is_valid_address(address) {
            return Err(MempoolError::InvalidInput { field: "address" });
        }
        if signature.is_empty() {
            return Err(MempoolError::InvalidInput { field: "signature" });
        }

        let now = self.time_source.now_millis();
        let entry = self
            .pool
            .live_entry(address, now)
            .cloned()
            .ok_or_else(|| MempoolError::NoPendingRequest {
                address: address.to_string(),
            })?;

        if !self.verifier.verify(&entry.message, address, signature) {
            tracing::info!("[sl-02] ❌ Signature rejected for {}", address);
            return Err(MempoolError::Unverified {
                reason: UNVERIFIED_REASON.to_string(),
            });
        }

        self.pool.grant(address);
        tracing::info!("[sl-02] ✅ Access granted to {}", address);

        Ok(VerifiedRequest {
            request: entry.view(now),
            message_signature: true,
        })
    }

    fn has_grant(&self, address: &str) -> bool {
        self.pool.has_grant(address)
    }

    fn consume_grant(&mut self, address: &str) {
        if self.pool.consume_grant(address) {
            tracing::debug!("[sl-02] Grant consumed for {}", address);
        }
    }

    fn revoke_request(&mut self, address: &str) {
        self.pool.remove(address);
    }

    fn purge_expired(&mut self) -> Vec<Address> {
        let purged = self.pool.purge_expired(self.time_source.now_millis());
        if !purged.is_empty() {
            tracing::info!("[sl-02] 🧹 Purged {} expired requests", purged.len());
        }
        purged
    }

    fn entries_snapshot(&self) -> Vec<ValidationRequestView> {
        let now = self.time_source.now_millis();
        self.pool
            .entries()
            .into_iter()
            .map(|entry| entry.view(now))
            .collect()
    }

    fn grants_snapshot(&self) -> Vec<Address> {
        self.pool.grants().cloned().collect()
    }
}
