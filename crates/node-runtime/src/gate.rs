//! # Append Authorization Gate
//!
//! The only path that appends star blocks. The chain write lock is held from
//! the grant check until the grant is consumed, so one grant authorizes
//! exactly one append even when the same address races itself.

use shared_types::is_valid_address;
use sl_01_chain_storage::{Block, BlockBody, ChainStorageApi, Star, StarRecord, StorageError};
use sl_02_request_mempool::RequestMempoolApi;
use thiserror::Error;
use tracing::{info, warn};

use crate::container::{SharedChain, SharedMempool};

/// Errors from the append gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("user has not been granted access to create a star")]
    Unauthorized { address: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Grant-checked star registration.
#[derive(Clone)]
pub struct AppendGate {
    chain: SharedChain,
    mempool: SharedMempool,
}

impl AppendGate {
    pub fn new(chain: SharedChain, mempool: SharedMempool) -> Self {
        Self { chain, mempool }
    }

    /// Appends a star owned by `address`. `star.story` is plain text and is
    /// stored hex-encoded.
    ///
    /// On success the grant and the pending request are both removed. On any
    /// failure neither is touched.
    pub fn register_star(&self, address: &str, star: Star) -> Result<Block, RegistryError> {
        validate(address, &star)?;

        let mut chain = self.chain.write();
        let mut mempool = self.mempool.lock();

        if !mempool.has_grant(address) {
            warn!("[runtime] Rejected star from {}: no access grant", address);
            return Err(RegistryError::Unauthorized {
                address: address.to_string(),
            });
        }

        let body = BlockBody::Star(StarRecord {
            address: address.to_string(),
            star: Star {
                story: hex::encode(star.story.as_bytes()),
                ..star
            },
        });
        let block = chain.append_block(body)?;

        mempool.consume_grant(address);
        mempool.revoke_request(address);

        info!(
            "[runtime] ⭐ Star registered by {} at height {}",
            address, block.height
        );
        Ok(block)
    }
}

fn validate(address: &str, star: &Star) -> Result<(), RegistryError> {
    if !is_valid_address(address) {
        return Err(RegistryError::InvalidInput("address data is missing".into()));
    }
    for (name, value) in [("ra", &star.ra), ("dec", &star.dec), ("story", &star.story)] {
        if value.is_empty() {
            return Err(RegistryError::InvalidInput(format!(
                "star {} property is missing",
                name
            )));
        }
    }
    Ok(())
}
