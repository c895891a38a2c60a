//! # Chain Storage Service
//!
//! The main service implementing the chain storage API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `ChainStorageApi` for append, lookup and validation
//! 2. Derives the tip height from the store's key count (no cached index)
//! 3. Uses dependency injection for the store and the clock

mod helpers;
mod storage;

use crate::domain::block::{Block, BlockBody};
use crate::domain::codec::{compute_block_hash, decode_block, encode_block};
use crate::domain::errors::StorageError;
use crate::domain::validation::ChainValidationReport;
use crate::domain::value_objects::ChainConfig;
use crate::ports::outbound::KeyValueStore;
use shared_types::TimeSource;

/// The Chain Storage Service.
///
/// Holds no chain state of its own: every read goes to the store, so an
/// out-of-band change to stored bytes is always visible to validation.
pub struct ChainStorageService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    /// Ordered key-value store (height -> serialized block).
    pub(crate) kv_store: KV,
    /// Clock used to stamp appended blocks.
    pub(crate) time_source: TS,
    /// Service configuration.
    pub(crate) config: ChainConfig,
}

/// Dependencies for ChainStorageService
pub struct ChainStorageDependencies<KV, TS> {
    pub kv_store: KV,
    pub time_source: TS,
}

impl<KV, TS> ChainStorageService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    /// Create a new chain service with the given dependencies.
    ///
    /// Does not touch the store; call `initialize()` to write genesis.
    pub fn new(deps: ChainStorageDependencies<KV, TS>, config: ChainConfig) -> Self {
        Self {
            kv_store: deps.kv_store,
            time_source: deps.time_source,
            config,
        }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }
}
