//! # Chain Storage Service - Helper Methods
//!
//! Private helper methods for the ChainStorageService.

use super::*;

impl<KV, TS> ChainStorageService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    /// Number of stored blocks.
    pub(crate) fn block_count(&self) -> Result<u64, StorageError> {
        self.kv_store.key_count().map_err(StorageError::from)
    }

    /// Raw stored bytes at `height`.
    pub(crate) fn load_raw(&self, height: u64) -> Result<Vec<u8>, StorageError> {
        self.kv_store
            .get(height)
            .map_err(StorageError::from)?
            .ok_or(StorageError::HeightNotFound { height })
    }

    /// Decode a stored block, treating undecodable bytes as an integrity
    /// failure rather than an error.
    pub(crate) fn load_for_validation(&self, height: u64) -> Result<Option<Block>, StorageError> {
        let raw = self.load_raw(height)?;
        match decode_block(&raw) {
            Ok(block) => Ok(Some(block)),
            Err(e) => {
                tracing::warn!("[sl-01] Block #{} cannot be decoded: {}", height, e);
                Ok(None)
            }
        }
    }

    /// Check that a block's stored hash matches its content.
    pub(crate) fn digest_matches(&self, block: &Block) -> Result<bool, StorageError> {
        let recomputed = compute_block_hash(block)?;
        if recomputed == block.hash {
            return Ok(true);
        }
        tracing::warn!(
            "[sl-01] Block #{} invalid hash: {} <> {}",
            block.height,
            block.hash,
            recomputed
        );
        Ok(false)
    }

    /// Fill height, time, linkage and hash for a block landing after `tip`.
    pub(crate) fn seal_block(
        &self,
        body: BlockBody,
        tip: Option<u64>,
    ) -> Result<Block, StorageError> {
        let mut block = Block::new(body);
        block.height = tip.map_or(0, |h| h + 1);
        block.time = self.time_source.now_secs();

        if let Some(prev_height) = tip {
            let previous = decode_block(&self.load_raw(prev_height)?)?;
            block.previous_block_hash = previous.hash;
        }

        block.hash = compute_block_hash(&block)?;
        Ok(block)
    }

    /// Decode every stored block, skipping (and logging) undecodable entries.
    pub(crate) fn scan_blocks(&self) -> Result<Vec<Block>, StorageError> {
        let entries = self.kv_store.scan_all().map_err(StorageError::from)?;

        let mut blocks = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match decode_block(&value) {
                Ok(block) => blocks.push(block),
                Err(e) => {
                    tracing::warn!("[sl-01] Skipping undecodable entry at key {}: {}", key, e);
                }
            }
        }
        Ok(blocks)
    }
}
