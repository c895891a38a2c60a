//! # Production Storage Adapters
//!
//! Enable the `rocksdb` feature to use the RocksDB backend:
//!
//! ```toml
//! node-runtime = { path = "...", features = ["rocksdb"] }
//! ```
//!
//! The file-backed and in-memory stores ship with `sl-01-chain-storage`.

#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::{RocksDbConfig, RocksDbStore, CF_BLOCKS};

pub use sl_01_chain_storage::{FileBackedKVStore, InMemoryKVStore};
