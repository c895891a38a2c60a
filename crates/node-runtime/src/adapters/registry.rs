//! API gateway backend.
//!
//! Implements sl-04's `RegistryBackend` over the shared chain and mempool
//! handles. Writes go through the [`AppendGate`]; lock guards never live
//! across an `.await`.
//!
//! Chain calls may hit the disk (file and RocksDB backends) while holding the
//! chain lock, so they run on tokio's blocking pool. Mempool calls are
//! in-memory and run inline.

use async_trait::async_trait;
use shared_types::Address;
use sl_01_chain_storage::{Block, ChainStorageApi, ChainValidationReport, Star};
use sl_02_request_mempool::{RequestMempoolApi, ValidationRequestView, VerifiedRequest};
use sl_04_api_gateway::{ApiError, RegistryBackend, INTERNAL_ERROR_MESSAGE};

use std::sync::Arc;

use crate::container::{SharedChain, SharedMempool};
use crate::gate::{AppendGate, RegistryError};

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidInput(msg) => ApiError::InvalidInput(msg),
            unauthorized @ RegistryError::Unauthorized { .. } => {
                ApiError::Unauthorized(unauthorized.to_string())
            }
            RegistryError::Storage(e) => e.into(),
        }
    }
}

/// Runs `f` on the blocking pool. A panicked task surfaces as `Internal`.
async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!("[runtime] Blocking chain task failed: {}", e);
        ApiError::Internal(INTERNAL_ERROR_MESSAGE.into())
    })?
}

/// `RegistryBackend` over the node's subsystems.
#[derive(Clone)]
pub struct RegistryAdapter {
    chain: SharedChain,
    mempool: SharedMempool,
    gate: AppendGate,
}

impl RegistryAdapter {
    pub fn new(chain: SharedChain, mempool: SharedMempool, gate: AppendGate) -> Self {
        Self {
            chain,
            mempool,
            gate,
        }
    }
}

#[async_trait]
impl RegistryBackend for RegistryAdapter {
    async fn block_by_height(&self, height: u64) -> Result<Block, ApiError> {
        let chain = Arc::clone(&self.chain);
        blocking(move || {
            let block = chain.read().get_block_by_height(height)?;
            Ok(block)
        })
        .await
    }

    async fn block_by_hash(&self, hash: &str) -> Result<Option<Block>, ApiError> {
        let chain = Arc::clone(&self.chain);
        let hash = hash.to_string();
        blocking(move || {
            let block = chain.read().get_block_by_hash(&hash)?;
            Ok(block)
        })
        .await
    }

    async fn blocks_by_address(&self, address: &str) -> Result<Vec<Block>, ApiError> {
        let chain = Arc::clone(&self.chain);
        let address = address.to_string();
        blocking(move || {
            let blocks = chain.read().get_blocks_by_address(&address)?;
            Ok(blocks)
        })
        .await
    }

    async fn register_star(&self, address: &str, star: Star) -> Result<Block, ApiError> {
        let gate = self.gate.clone();
        let address = address.to_string();
        blocking(move || {
            let block = gate.register_star(&address, star)?;
            Ok(block)
        })
        .await
    }

    async fn request_validation(&self, address: &str) -> Result<ValidationRequestView, ApiError> {
        Ok(self.mempool.lock().request_validation(address)?)
    }

    async fn validate_signature(
        &self,
        address: &str,
        signature: &str,
    ) -> Result<VerifiedRequest, ApiError> {
        Ok(self.mempool.lock().verify_and_grant(address, signature)?)
    }

    async fn validate_chain(&self) -> Result<ChainValidationReport, ApiError> {
        let chain = Arc::clone(&self.chain);
        blocking(move || {
            let report = chain.read().validate_chain()?;
            Ok(report)
        })
        .await
    }

    async fn mempool_snapshot(&self) -> Vec<ValidationRequestView> {
        self.mempool.lock().entries_snapshot()
    }

    async fn access_list(&self) -> Vec<Address> {
        self.mempool.lock().grants_snapshot()
    }
}
