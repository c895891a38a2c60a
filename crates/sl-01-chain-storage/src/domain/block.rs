//! # Block Entity
//!
//! One immutable ledger record. The field order of [`Block`] is part of the
//! persisted format: the digest is recomputed from the serialized form during
//! validation, so the declaration order below must never change.

use serde::{Deserialize, Serialize};
use shared_types::{Address, TimestampSecs};

/// A ledger record with position, payload, timestamp and integrity hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Lowercase hex SHA-256 of the block with this field cleared.
    pub hash: String,
    /// Position in the chain, starting at 0.
    pub height: u64,
    /// Application payload.
    pub body: BlockBody,
    /// Seconds since epoch, stamped at append time.
    pub time: TimestampSecs,
    /// Hash of the block at `height - 1`; empty for genesis.
    pub previous_block_hash: String,
}

impl Block {
    /// Create an unsealed block. Height, time, linkage and hash are filled in
    /// by the chain service.
    pub fn new(body: BlockBody) -> Self {
        Self {
            hash: String::new(),
            height: 0,
            body,
            time: 0,
            previous_block_hash: String::new(),
        }
    }

    /// Copy of this block with the hash field cleared (digest input).
    pub fn without_hash(&self) -> Self {
        Self {
            hash: String::new(),
            ..self.clone()
        }
    }

    pub fn is_genesis(&self) -> bool {
        self.height == 0
    }
}

/// Block payload.
///
/// Adjacently tagged so the variant is explicit in the stored bytes instead of
/// being inferred from which fields happen to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum BlockBody {
    /// Free-form payload (genesis, notes).
    Text(String),
    /// A star registration owned by a wallet address.
    Star(StarRecord),
}

impl BlockBody {
    pub fn text(value: impl Into<String>) -> Self {
        BlockBody::Text(value.into())
    }

    /// True if the body carries a structured star record.
    pub fn has_extended_content(&self) -> bool {
        matches!(self, BlockBody::Star(_))
    }

    /// The star record, if any.
    pub fn star_record(&self) -> Option<&StarRecord> {
        match self {
            BlockBody::Star(record) => Some(record),
            BlockBody::Text(_) => None,
        }
    }

    /// Owner address for star bodies.
    pub fn owner(&self) -> Option<&str> {
        self.star_record().map(|r| r.address.as_str())
    }
}

/// Star registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Wallet that was granted access to register this star.
    pub address: Address,
    pub star: Star,
}

/// Celestial coordinates and story of a registered star.
///
/// `story` is stored hex-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    /// Right ascension.
    pub ra: String,
    /// Declination.
    pub dec: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,
    pub story: String,
}

impl Star {
    /// Decode the hex-encoded story. Returns `None` if the stored value is not
    /// valid hex or not UTF-8.
    pub fn decoded_story(&self) -> Option<String> {
        let bytes = hex::decode(&self.story).ok()?;
        String::from_utf8(bytes).ok()
    }
}
