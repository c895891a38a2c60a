//! Outbound ports for the API gateway.

use crate::domain::error::ApiError;
use async_trait::async_trait;
use shared_types::Address;
use sl_01_chain_storage::{Block, ChainValidationReport, Star};
use sl_02_request_mempool::{ValidationRequestView, VerifiedRequest};

/// Everything the HTTP layer needs from the registry.
///
/// Implemented by the node runtime over the chain service, the mempool and
/// the append gate.
#[async_trait]
pub trait RegistryBackend: Send + Sync {
    async fn block_by_height(&self, height: u64) -> Result<Block, ApiError>;

    async fn block_by_hash(&self, hash: &str) -> Result<Option<Block>, ApiError>;

    async fn blocks_by_address(&self, address: &str) -> Result<Vec<Block>, ApiError>;

    /// Appends a star for `address` if it holds a grant. `star.story` is
    /// plain text; the backend encodes it.
    async fn register_star(&self, address: &str, star: Star) -> Result<Block, ApiError>;

    async fn request_validation(&self, address: &str) -> Result<ValidationRequestView, ApiError>;

    async fn validate_signature(
        &self,
        address: &str,
        signature: &str,
    ) -> Result<VerifiedRequest, ApiError>;

    async fn validate_chain(&self) -> Result<ChainValidationReport, ApiError>;

    async fn mempool_snapshot(&self) -> Vec<ValidationRequestView>;

    async fn access_list(&self) -> Vec<Address>;
}
