use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{KeyValueStore, ScanResult};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File-backed key-value store.
///
/// Keeps the whole map in memory and rewrites a snapshot file on every write.
/// Each snapshot is written to a temp file, fsynced, then renamed over the
/// previous one, so a crash leaves either the old or the new snapshot.
/// Suitable for the small chains this ledger targets; use RocksDB for more.
pub struct FileBackedKVStore {
    data: BTreeMap<u64, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store at `path`, creating an empty one if the file is absent.
    ///
    /// # Errors
    /// - `IOError` if the file exists but cannot be read
    /// - `CorruptionError` if the snapshot is truncated
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();

        let data = match std::fs::File::open(&path) {
            Ok(mut file) => {
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes).map_err(io_error)?;
                let data = decode_snapshot(&bytes)?;
                tracing::info!(
                    "[sl-01] 💾 Loaded {} keys from {} ({} bytes)",
                    data.len(),
                    path.display(),
                    bytes.len()
                );
                data
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("[sl-01] 📁 No existing storage file at {}", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(io_error(e)),
        };

        Ok(Self { data, path })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_to_file(&self) -> Result<(), KVStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let bytes = encode_snapshot(&self.data);

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;

        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;
        Ok(())
    }
}

fn io_error(e: std::io::Error) -> KVStoreError {
    KVStoreError::IOError {
        message: e.to_string(),
    }
}

// Snapshot format: repeated [key: u64 BE][value_len: u32 LE][value]
fn encode_snapshot(data: &BTreeMap<u64, Vec<u8>>) -> Vec<u8> {
    let mut bytes = Vec::new();
    for (key, value) in data {
        bytes.extend_from_slice(&key.to_be_bytes());
        bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
        bytes.extend_from_slice(value);
    }
    bytes
}

fn decode_snapshot(bytes: &[u8]) -> Result<BTreeMap<u64, Vec<u8>>, KVStoreError> {
    let truncated = |at: usize| KVStoreError::CorruptionError {
        message: format!("snapshot truncated at byte {}", at),
    };

    let mut data = BTreeMap::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let key_bytes: [u8; 8] = bytes
            .get(cursor..cursor + 8)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| truncated(cursor))?;
        cursor += 8;

        let len_bytes: [u8; 4] = bytes
            .get(cursor..cursor + 4)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| truncated(cursor))?;
        cursor += 4;

        let value_len = u32::from_le_bytes(len_bytes) as usize;
        let value = bytes
            .get(cursor..cursor + value_len)
            .ok_or_else(|| truncated(cursor))?;
        cursor += value_len;

        data.insert(u64::from_be_bytes(key_bytes), value.to_vec());
    }

    Ok(data)
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: u64) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(&key).cloned())
    }

    fn put(&mut self, key: u64, value: &[u8]) -> Result<(), KVStoreError> {
        let previous = self.data.insert(key, value.to_vec());
        if let Err(e) = self.save_to_file() {
            // Keep memory consistent with disk.
            match previous {
                Some(old) => self.data.insert(key, old),
                None => self.data.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn exists(&self, key: u64) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(&key))
    }

    fn key_count(&self) -> Result<u64, KVStoreError> {
        Ok(self.data.len() as u64)
    }

    fn scan_all(&self) -> Result<ScanResult, KVStoreError> {
        Ok(self.data.iter().map(|(k, v)| (*k, v.clone())).collect())
    }
}
