//! # Node Configuration
//!
//! Unified configuration for the subsystems and runtime parameters.
//!
//! Every value has a default and can be overridden from the environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SL_BIND_ADDR` | `127.0.0.1` |
//! | `SL_HTTP_PORT` | `8000` |
//! | `SL_DATA_DIR` | `./chaindata` |
//! | `SL_STORAGE_BACKEND` | `file` (`memory`, `rocksdb`) |
//! | `SL_VALIDATION_WINDOW_SECS` | `300` |
//! | `SL_SWEEP_INTERVAL_SECS` | `30` |

use sl_01_chain_storage::ChainConfig;
use sl_02_request_mempool::MempoolConfig;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Network configuration.
    pub network: NetworkConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Request mempool configuration.
    pub mempool: MempoolSettings,
    /// Chain configuration.
    pub chain: ChainConfig,
}

impl NodeConfig {
    /// Defaults overridden from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup(var)` for each known variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("SL_BIND_ADDR") {
            config.network.bind_addr = parse_var("SL_BIND_ADDR", &addr)?;
        }
        if let Some(port) = lookup("SL_HTTP_PORT") {
            config.network.http_port = parse_var("SL_HTTP_PORT", &port)?;
        }
        if let Some(dir) = lookup("SL_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(backend) = lookup("SL_STORAGE_BACKEND") {
            config.storage.backend = backend.parse()?;
        }
        if let Some(window) = lookup("SL_VALIDATION_WINDOW_SECS") {
            config.mempool.validation_window_secs = parse_var("SL_VALIDATION_WINDOW_SECS", &window)?;
        }
        if let Some(interval) = lookup("SL_SWEEP_INTERVAL_SECS") {
            config.mempool.sweep_interval_secs = parse_var("SL_SWEEP_INTERVAL_SECS", &interval)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values the runtime cannot operate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mempool.validation_window_secs == 0 {
            return Err(ConfigError::ZeroValidationWindow);
        }
        if self.mempool.sweep_interval_secs == 0 {
            return Err(ConfigError::ZeroSweepInterval);
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("validation window must be greater than zero")]
    ZeroValidationWindow,

    #[error("sweep interval must be greater than zero")]
    ZeroSweepInterval,

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("unknown storage backend {0:?} (expected file, memory or rocksdb)")]
    UnknownBackend(String),
}

/// Network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: IpAddr,
    /// HTTP listening port.
    pub http_port: u16,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            http_port: 8000,
        }
    }
}

/// Where blocks are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Snapshot file under the data directory.
    #[default]
    File,
    /// Process memory only; lost on restart.
    Memory,
    /// RocksDB under the data directory (feature `rocksdb`).
    RocksDb,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            "rocksdb" => Ok(StorageBackend::RocksDb),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Data directory for the chain.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: PathBuf::from("./chaindata"),
        }
    }
}

impl StorageConfig {
    /// Snapshot file used by the file backend.
    pub fn chain_file(&self) -> PathBuf {
        self.data_dir.join("chain.db")
    }
}

/// Request mempool configuration.
#[derive(Debug, Clone)]
pub struct MempoolSettings {
    /// Lifetime of a validation request.
    pub validation_window_secs: u64,
    /// Period of the background expiry sweep.
    pub sweep_interval_secs: u64,
}

impl Default for MempoolSettings {
    fn default() -> Self {
        Self {
            validation_window_secs: 300,
            sweep_interval_secs: 30,
        }
    }
}

impl MempoolSettings {
    pub fn mempool_config(&self) -> MempoolConfig {
        MempoolConfig::with_window_ms(self.validation_window_secs.saturating_mul(1000))
    }
}
