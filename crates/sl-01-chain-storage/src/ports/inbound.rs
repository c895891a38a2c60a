//! # Inbound Port (Driving Port)
//!
//! The API the runtime and gateway use to drive the ledger.

use crate::domain::block::{Block, BlockBody};
use crate::domain::errors::StorageError;
use crate::domain::validation::ChainValidationReport;

/// Primary API for the chain storage subsystem.
///
/// Writes take `&mut self`; callers sharing the service across tasks must hold
/// an exclusive lock for the whole call so that height assignment, linkage and
/// persistence happen as one unit.
pub trait ChainStorageApi: Send + Sync {
    /// Write the genesis block if the store is empty.
    ///
    /// Returns the genesis block when one was created, `None` if the chain
    /// already had blocks.
    fn initialize(&mut self) -> Result<Option<Block>, StorageError>;

    /// Seal and persist a new block at the next height.
    ///
    /// # Errors
    /// - `StoreUnavailable`: the store failed
    /// - `HeightConflict`: the next height was already occupied
    fn append_block(&mut self, body: BlockBody) -> Result<Block, StorageError>;

    /// Height of the tip, `None` for an empty chain.
    fn get_block_height(&self) -> Result<Option<u64>, StorageError>;

    /// Load the block at `height`.
    ///
    /// # Errors
    /// - `HeightNotFound`: `height` is outside `[0, tip]`
    fn get_block_by_height(&self, height: u64) -> Result<Block, StorageError>;

    /// Find a block by hash. Linear scan over every stored block.
    fn get_block_by_hash(&self, hash: &str) -> Result<Option<Block>, StorageError>;

    /// All star blocks registered by `address`, in height order. Linear scan.
    fn get_blocks_by_address(&self, address: &str) -> Result<Vec<Block>, StorageError>;

    /// Recompute the digest of the stored block at `height` and compare.
    ///
    /// Returns `Ok(false)` on mismatch or undecodable bytes.
    fn validate_block(&self, height: u64) -> Result<bool, StorageError>;

    /// Re-verify every digest and every link in the chain.
    fn validate_chain(&self) -> Result<ChainValidationReport, StorageError>;
}
