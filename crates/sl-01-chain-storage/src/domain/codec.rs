//! # Canonical Codec
//!
//! Persisted record format and block digest.
//!
//! A stored value is the full [`Block`] serialized as JSON with fields in
//! declaration order (`hash`, `height`, `body`, `time`, `previousBlockHash`).
//! The digest is SHA-256 over the same encoding with `hash` set to `""`,
//! rendered as lowercase hex. Both sides of validation go through this module
//! so the bytes hashed at append time are reproduced exactly on re-check.

use super::block::Block;
use super::errors::StorageError;
use sha2::{Digest, Sha256};

/// Serialize a block into its stored representation.
pub fn encode_block(block: &Block) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec(block).map_err(StorageError::from)
}

/// Deserialize a stored value.
pub fn decode_block(data: &[u8]) -> Result<Block, StorageError> {
    serde_json::from_slice(data).map_err(StorageError::from)
}

/// Compute the digest of `block`, ignoring whatever its `hash` field holds.
pub fn compute_block_hash(block: &Block) -> Result<String, StorageError> {
    let bytes = encode_block(&block.without_hash())?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
