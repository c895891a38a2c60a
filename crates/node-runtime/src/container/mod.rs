//! # Node Container
//!
//! Holds the subsystem instances and wires their ports.
//!
//! ## Thread Safety
//!
//! - Chain service behind `Arc<RwLock<_>>`: appends take the write lock for
//!   the whole height, hash and persist step; queries share the read lock.
//! - Mempool behind `Arc<Mutex<_>>`: every operation is linearizable.
//! - Lock order is always chain then mempool.

pub mod config;

pub use config::{ConfigError, MempoolSettings, NetworkConfig, NodeConfig, StorageBackend, StorageConfig};

use parking_lot::{Mutex, RwLock};
use shared_types::{SystemTimeSource, TimeSource};
use sl_01_chain_storage::{
    ChainStorageDependencies, ChainStorageService, FileBackedKVStore, InMemoryKVStore,
    KVStoreError, KeyValueStore,
};
use sl_02_request_mempool::{RequestMempoolDependencies, RequestMempoolService};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::adapters::BitcoinSignatureAdapter;
use crate::gate::AppendGate;

/// Clock shared by every subsystem.
pub type SharedClock = Arc<dyn TimeSource>;

/// Chain service over whichever backend was configured.
pub type ChainService = ChainStorageService<Box<dyn KeyValueStore>, SharedClock>;

/// Mempool service verifying Bitcoin signed messages.
pub type MempoolService = RequestMempoolService<BitcoinSignatureAdapter, SharedClock>;

pub type SharedChain = Arc<RwLock<ChainService>>;
pub type SharedMempool = Arc<Mutex<MempoolService>>;

/// Startup failures while building the container.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("failed to open {backend:?} store: {source}")]
    Storage {
        backend: StorageBackend,
        #[source]
        source: KVStoreError,
    },

    #[error("storage backend {0:?} is not compiled in (enable the `rocksdb` feature)")]
    BackendUnavailable(StorageBackend),
}

/// Central container holding all subsystem instances.
pub struct NodeContainer {
    pub config: NodeConfig,
    pub chain: SharedChain,
    pub mempool: SharedMempool,
}

impl NodeContainer {
    /// Open the configured store and build the subsystems on the system clock.
    pub fn new(config: NodeConfig) -> Result<Self, ContainerError> {
        let store = open_store(&config.storage)?;
        Ok(Self::with_parts(config, store, Arc::new(SystemTimeSource)))
    }

    /// Build the subsystems over an already opened store and a given clock.
    pub fn with_parts(config: NodeConfig, kv_store: Box<dyn KeyValueStore>, clock: SharedClock) -> Self {
        let chain = ChainStorageService::new(
            ChainStorageDependencies {
                kv_store,
                time_source: Arc::clone(&clock),
            },
            config.chain.clone(),
        );

        let mempool = RequestMempoolService::new(
            RequestMempoolDependencies {
                verifier: BitcoinSignatureAdapter::new(),
                time_source: clock,
            },
            config.mempool.mempool_config(),
        );

        info!(
            "[runtime] Subsystems ready (validation window {}s)",
            config.mempool.validation_window_secs
        );

        Self {
            config,
            chain: Arc::new(RwLock::new(chain)),
            mempool: Arc::new(Mutex::new(mempool)),
        }
    }

    /// The only path that appends application blocks.
    pub fn gate(&self) -> AppendGate {
        AppendGate::new(Arc::clone(&self.chain), Arc::clone(&self.mempool))
    }
}

fn open_store(storage: &StorageConfig) -> Result<Box<dyn KeyValueStore>, ContainerError> {
    let backend = storage.backend;
    let wrap = |source| ContainerError::Storage { backend, source };

    match backend {
        StorageBackend::Memory => {
            info!("[runtime] Using in-memory store; the chain is lost on exit");
            Ok(Box::new(InMemoryKVStore::new()))
        }
        StorageBackend::File => {
            let store = FileBackedKVStore::open(storage.chain_file()).map_err(wrap)?;
            Ok(Box::new(store))
        }
        #[cfg(feature = "rocksdb")]
        StorageBackend::RocksDb => {
            let store = crate::adapters::storage::RocksDbStore::open_default(
                storage.data_dir.join("rocksdb"),
            )
            .map_err(wrap)?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "rocksdb"))]
        StorageBackend::RocksDb => Err(ContainerError::BackendUnavailable(backend)),
    }
}
