//! # Chain Storage API Implementation
//!
//! Implements the ChainStorageApi trait for append, lookup and validation.

use super::*;
use crate::ports::inbound::ChainStorageApi;
use std::collections::BTreeSet;

impl<KV, TS> ChainStorageApi for ChainStorageService<KV, TS>
where
    KV: KeyValueStore,
    TS: TimeSource,
{
    fn initialize(&mut self) -> Result<Option<Block>, StorageError> {
        if self.block_count()? > 0 {
            tracing::info!("[sl-01] Existing chain found, genesis not needed");
            return Ok(None);
        }

        tracing::info!("[sl-01] Empty store, writing genesis block");
        let genesis = self.append_block(BlockBody::text(self.config.genesis_body.clone()))?;
        Ok(Some(genesis))
    }

    fn append_block(&mut self, body: BlockBody) -> Result<Block, StorageError> {
        // One read of the tip drives height, linkage and the write key.
        let tip = self.get_block_height()?;
        let block = self.seal_block(body, tip)?;
        let data = encode_block(&block)?;

        let inserted = self
            .kv_store
            .put_if_absent(block.height, &data)
            .map_err(StorageError::from)?;
        if !inserted {
            return Err(StorageError::HeightConflict {
                height: block.height,
            });
        }

        tracing::info!(
            "[sl-01] 📦 Block #{} stored! Hash: {}",
            block.height,
            &block.hash[..16]
        );

        Ok(block)
    }

    fn get_block_height(&self) -> Result<Option<u64>, StorageError> {
        Ok(self.block_count()?.checked_sub(1))
    }

    fn get_block_by_height(&self, height: u64) -> Result<Block, StorageError> {
        match self.get_block_height()? {
            Some(tip) if height <= tip => decode_block(&self.load_raw(height)?),
            _ => Err(StorageError::HeightNotFound { height }),
        }
    }

    fn get_block_by_hash(&self, hash: &str) -> Result<Option<Block>, StorageError> {
        let found = self.scan_blocks()?.into_iter().find(|b| b.hash == hash);
        if found.is_none() {
            tracing::debug!("[sl-01] No block with hash {}", hash);
        }
        Ok(found)
    }

    fn get_blocks_by_address(&self, address: &str) -> Result<Vec<Block>, StorageError> {
        Ok(self
            .scan_blocks()?
            .into_iter()
            .filter(|b| b.body.owner() == Some(address))
            .collect())
    }

    fn validate_block(&self, height: u64) -> Result<bool, StorageError> {
        match self.load_for_validation(height)? {
            Some(block) => self.digest_matches(&block),
            None => Ok(false),
        }
    }

    fn validate_chain(&self) -> Result<ChainValidationReport, StorageError> {
        let Some(tip) = self.get_block_height()? else {
            return Ok(ChainValidationReport::from_failures(BTreeSet::new(), 0));
        };

        let mut failures = BTreeSet::new();
        let mut current = self.load_for_validation(0)?;

        for height in 0..tip {
            let next = self.load_for_validation(height + 1)?;

            match &current {
                Some(block) => {
                    if !self.digest_matches(block)? {
                        failures.insert(height);
                    }
                    let linked = next
                        .as_ref()
                        .is_some_and(|n| n.previous_block_hash == block.hash);
                    if !linked {
                        tracing::warn!(
                            "[sl-01] Block #{} hash does not match block #{} previous hash",
                            height,
                            height + 1
                        );
                        failures.insert(height);
                    }
                }
                None => {
                    failures.insert(height);
                }
            }

            current = next;
        }

        // The tip has no successor; only its own digest is checked.
        match &current {
            Some(block) if self.digest_matches(block)? => {}
            _ => {
                failures.insert(tip);
            }
        }

        if failures.is_empty() {
            tracing::info!("[sl-01] ✓ Chain valid ({} blocks)", tip + 1);
        } else {
            tracing::warn!(
                "[sl-01] Block errors = {}, heights: {:?}",
                failures.len(),
                failures
            );
        }

        Ok(ChainValidationReport::from_failures(failures, tip + 1))
    }
}
