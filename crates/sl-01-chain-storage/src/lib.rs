//! # Chain Storage (sl-01)
//!
//! The chain manager is the sole reader and writer of ledger data. It assigns
//! heights, links each block to its predecessor, computes the block digest,
//! persists blocks to an ordered key-value store and re-verifies integrity on
//! demand.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Contiguous Heights | Block `h` is stored under key `h`, heights start at 0 with no gaps |
//! | 2 | Hash Linkage | `chain[h].previous_block_hash == chain[h-1].hash` for `h > 0` |
//! | 3 | Digest Integrity | `hash == SHA256(canonical JSON with hash cleared)` |
//! | 4 | Append-Only | A stored key is never overwritten (`put_if_absent`) |
//! | 5 | Genesis Once | Genesis is only written into an empty store |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Block entity, canonical codec, validation report, errors
//! - `ports/` - `ChainStorageApi` (inbound) and `KeyValueStore` (outbound)
//! - `adapters/` - In-memory and file-backed stores
//! - `service/` - `ChainStorageService` implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use sl_01_chain_storage::{ChainStorageService, ChainConfig, InMemoryKVStore};
//!
//! let deps = ChainStorageDependencies { kv_store: InMemoryKVStore::new(), time_source: SystemTimeSource };
//! let mut chain = ChainStorageService::new(deps, ChainConfig::default());
//! chain.initialize()?;
//! let block = chain.append_block(BlockBody::text("hello"))?;
//! assert!(chain.validate_chain()?.valid);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{FileBackedKVStore, InMemoryKVStore};
pub use domain::block::{Block, BlockBody, Star, StarRecord};
pub use domain::codec::{compute_block_hash, decode_block, encode_block};
pub use domain::errors::{KVStoreError, StorageError};
pub use domain::validation::ChainValidationReport;
pub use domain::value_objects::{ChainConfig, GENESIS_BODY};
pub use ports::inbound::ChainStorageApi;
pub use ports::outbound::{KeyValueStore, ScanResult};
pub use service::{ChainStorageDependencies, ChainStorageService};
