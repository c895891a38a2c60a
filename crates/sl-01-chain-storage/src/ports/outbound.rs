//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the chain service. The store is an ordered map
//! from block height to the serialized block.

use crate::domain::errors::KVStoreError;

/// Result of a full scan: `(height, stored bytes)` in ascending key order.
pub type ScanResult = Vec<(u64, Vec<u8>)>;

/// Abstract interface for the ordered key-value database.
///
/// Production: `FileBackedKVStore`, or `RocksDbStore` in node-runtime
/// (feature `rocksdb`).
/// Testing: `InMemoryKVStore`.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`.
    fn get(&self, key: u64) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a key-value pair, overwriting any previous value.
    fn put(&mut self, key: u64, value: &[u8]) -> Result<(), KVStoreError>;

    /// Put only if `key` is vacant. Returns `false` without writing when the
    /// key is already taken.
    ///
    /// Adapters with native conditional writes should override this so the
    /// check and the write are a single step.
    fn put_if_absent(&mut self, key: u64, value: &[u8]) -> Result<bool, KVStoreError> {
        if self.exists(key)? {
            return Ok(false);
        }
        self.put(key, value)?;
        Ok(true)
    }

    /// Check if a key exists.
    fn exists(&self, key: u64) -> Result<bool, KVStoreError> {
        Ok(self.get(key)?.is_some())
    }

    /// Number of keys in the store.
    fn key_count(&self) -> Result<u64, KVStoreError>;

    /// Every key-value pair in ascending key order.
    fn scan_all(&self) -> Result<ScanResult, KVStoreError>;
}

/// Lets the runtime choose a backend at startup (`Box<dyn KeyValueStore>`).
impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: u64) -> Result<Option<Vec<u8>>, KVStoreError> {
        (**self).get(key)
    }

    fn put(&mut self, key: u64, value: &[u8]) -> Result<(), KVStoreError> {
        (**self).put(key, value)
    }

    fn put_if_absent(&mut self, key: u64, value: &[u8]) -> Result<bool, KVStoreError> {
        (**self).put_if_absent(key, value)
    }

    fn exists(&self, key: u64) -> Result<bool, KVStoreError> {
        (**self).exists(key)
    }

    fn key_count(&self) -> Result<u64, KVStoreError> {
        (**self).key_count()
    }

    fn scan_all(&self) -> Result<ScanResult, KVStoreError> {
        (**self).scan_all()
    }
}
