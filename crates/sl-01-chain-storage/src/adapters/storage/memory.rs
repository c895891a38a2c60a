use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{KeyValueStore, ScanResult};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory key-value store.
///
/// Clones share the same map, like two handles onto one database. Tests use
/// a second handle to tamper with stored bytes behind the service's back.
#[derive(Clone, Default)]
pub struct InMemoryKVStore {
    data: Arc<RwLock<BTreeMap<u64, Vec<u8>>>>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: u64) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.read().get(&key).cloned())
    }

    fn put(&mut self, key: u64, value: &[u8]) -> Result<(), KVStoreError> {
        self.data.write().insert(key, value.to_vec());
        Ok(())
    }

    fn put_if_absent(&mut self, key: u64, value: &[u8]) -> Result<bool, KVStoreError> {
        let mut data = self.data.write();
        if data.contains_key(&key) {
            return Ok(false);
        }
        data.insert(key, value.to_vec());
        Ok(true)
    }

    fn exists(&self, key: u64) -> Result<bool, KVStoreError> {
        Ok(self.data.read().contains_key(&key))
    }

    fn key_count(&self) -> Result<u64, KVStoreError> {
        Ok(self.data.read().len() as u64)
    }

    fn scan_all(&self) -> Result<ScanResult, KVStoreError> {
        Ok(self
            .data
            .read()
            .iter()
            .map(|(k, v)| (*k, v.clone()))
            .collect())
    }
}
