//! # Chain Validation Report

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of a full chain re-verification.
///
/// `failed_heights` is sorted and free of duplicates. A height appears if its
/// digest does not match its content, if its hash does not match the
/// successor's `previous_block_hash`, or if its stored bytes do not decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainValidationReport {
    pub valid: bool,
    pub failed_heights: Vec<u64>,
    /// Number of blocks inspected.
    pub blocks_checked: u64,
}

impl ChainValidationReport {
    pub(crate) fn from_failures(failures: BTreeSet<u64>, blocks_checked: u64) -> Self {
        Self {
            valid: failures.is_empty(),
            failed_heights: failures.into_iter().collect(),
            blocks_checked,
        }
    }
}
