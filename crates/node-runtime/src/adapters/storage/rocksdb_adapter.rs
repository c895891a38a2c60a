//! # RocksDB Storage Adapter
//!
//! RocksDB implementation of the chain's `KeyValueStore` port.
//!
//! ## Layout
//!
//! Blocks live in the `blocks` column family keyed by height as 8 big-endian
//! bytes, so RocksDB's lexicographic key order is height order and
//! `scan_all` needs no sort.
//!
//! ## Configuration
//!
//! - Snappy compression
//! - Bloom filters (10 bits per key)
//! - fsync on write for durability

use parking_lot::RwLock;
use rocksdb::{ColumnFamilyDescriptor, IteratorMode, Options, WriteOptions, DB};
use sl_01_chain_storage::{KVStoreError, KeyValueStore, ScanResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Column family holding serialized blocks.
pub const CF_BLOCKS: &str = "blocks";

/// RocksDB configuration.
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: PathBuf,
    /// Block cache size in bytes (default: 64MB)
    pub block_cache_size: usize,
    /// Write buffer size in bytes (default: 16MB)
    pub write_buffer_size: usize,
    /// Enable fsync after each write (default: true for durability)
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./chaindata/rocksdb"),
            block_cache_size: 64 * 1024 * 1024,
            write_buffer_size: 16 * 1024 * 1024,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    /// Create config for testing (smaller buffers, no sync)
    pub fn for_testing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 4 * 1024 * 1024,
            write_buffer_size: 1024 * 1024,
            sync_writes: false,
        }
    }
}

/// RocksDB-backed block store.
///
/// The lock serializes `put_if_absent` so its existence check and write are
/// one step with respect to other writers sharing this handle.
pub struct RocksDbStore {
    db: Arc<RwLock<DB>>,
    config: RocksDbConfig,
}

impl RocksDbStore {
    /// Open or create a RocksDB database
    pub fn open(config: RocksDbConfig) -> Result<Self, KVStoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let mut cf_opts = Options::default();
        cf_opts.set_compression_type(rocksdb::DBCompressionType::Snappy);
        let descriptors = vec![ColumnFamilyDescriptor::new(CF_BLOCKS, cf_opts)];

        let db = DB::open_cf_descriptors(&opts, &config.path, descriptors).map_err(|e| {
            KVStoreError::IOError {
                message: format!("Failed to open RocksDB: {}", e),
            }
        })?;

        tracing::info!("[sl-01] 💾 Opened RocksDB at {}", config.path.display());

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            config,
        })
    }

    /// Open with default tuning at `path`.
    pub fn open_default(path: impl AsRef<Path>) -> Result<Self, KVStoreError> {
        Self::open(RocksDbConfig {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        })
    }

    fn write_opts(&self) -> WriteOptions {
        let mut opts = WriteOptions::default();
        opts.set_sync(self.config.sync_writes);
        opts
    }
}

fn rocks_error(op: &str, e: rocksdb::Error) -> KVStoreError {
    KVStoreError::IOError {
        message: format!("RocksDB {} failed: {}", op, e),
    }
}

fn missing_cf() -> KVStoreError {
    KVStoreError::CorruptionError {
        message: format!("column family '{}' not found", CF_BLOCKS),
    }
}

fn decode_key(raw: &[u8]) -> Result<u64, KVStoreError> {
    let bytes: [u8; 8] = raw.try_into().map_err(|_| KVStoreError::CorruptionError {
        message: format!("key of {} bytes is not a height", raw.len()),
    })?;
    Ok(u64::from_be_bytes(bytes))
}

impl KeyValueStore for RocksDbStore {
    fn get(&self, key: u64) -> Result<Option<Vec<u8>>, KVStoreError> {
        let db = self.db.read();
        let cf = db.cf_handle(CF_BLOCKS).ok_or_else(missing_cf)?;
        db.get_cf(cf, key.to_be_bytes())
            .map_err(|e| rocks_error("get", e))
    }

    fn put(&mut self, key: u64, value: &[u8]) -> Result<(), KVStoreError> {
        let db = self.db.write();
        let cf = db.cf_handle(CF_BLOCKS).ok_or_else(missing_cf)?;
        db.put_cf_opt(cf, key.to_be_bytes(), value, &self.write_opts())
            .map_err(|e| rocks_error("put", e))
    }

    fn put_if_absent(&mut self, key: u64, value: &[u8]) -> Result<bool, KVStoreError> {
        let db = self.db.write();
        let cf = db.cf_handle(CF_BLOCKS).ok_or_else(missing_cf)?;
        let existing = db
            .get_cf(cf, key.to_be_bytes())
            .map_err(|e| rocks_error("get", e))?;
        if existing.is_some() {
            return Ok(false);
        }
        db.put_cf_opt(cf, key.to_be_bytes(), value, &self.write_opts())
            .map_err(|e| rocks_error("put", e))?;
        Ok(true)
    }

    fn key_count(&self) -> Result<u64, KVStoreError> {
        let db = self.db.read();
        let cf = db.cf_handle(CF_BLOCKS).ok_or_else(missing_cf)?;
        let mut count = 0u64;
        for item in db.iterator_cf(cf, IteratorMode::Start) {
            item.map_err(|e| rocks_error("iterate", e))?;
            count += 1;
        }
        Ok(count)
    }

    fn scan_all(&self) -> Result<ScanResult, KVStoreError> {
        let db = self.db.read();
        let cf = db.cf_handle(CF_BLOCKS).ok_or_else(missing_cf)?;
        db.iterator_cf(cf, IteratorMode::Start)
            .map(|item| {
                let (key, value) = item.map_err(|e| rocks_error("iterate", e))?;
                Ok((decode_key(&key)?, value.to_vec()))
            })
            .collect()
    }
}
