//! # Request Pool
//!
//! Entry map plus grant set. Pure state: every time-dependent operation takes
//! `now` from the caller, so the pool never reads a clock itself.
//!
//! Expiry is lazy. An expired entry is dropped the first time it is looked
//! at, and `purge_expired()` drops the rest in one pass for the background
//! sweep.

use super::entities::MempoolEntry;
use super::value_objects::MempoolConfig;
use shared_types::{Address, TimestampMs};
use std::collections::{BTreeSet, HashMap};

/// Pending requests and outstanding grants.
#[derive(Debug, Default)]
pub struct RequestPool {
    config: MempoolConfig,
    entries: HashMap<Address, MempoolEntry>,
    grants: BTreeSet<Address>,
}

impl RequestPool {
    pub fn new(config: MempoolConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            grants: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> &MempoolConfig {
        &self.config
    }

    /// Returns the live entry for `address`, creating one if there is none.
    ///
    /// The boolean is true when a new entry was created. An existing live entry
    /// is returned untouched: same message, timestamp and deadline.
    pub fn insert_or_get(&mut self, address: &str, now: TimestampMs) -> (&MempoolEntry, bool) {
        self.drop_if_expired(address, now);

        let mut created = false;
        let entry = self.entries.entry(address.to_string()).or_insert_with(|| {
            created = true;
            MempoolEntry::new(address.to_string(), now, &self.config)
        });
        (entry, created)
    }

    /// Live entry for `address`. An expired entry is removed and `None`
    /// returned.
    pub fn live_entry(&mut self, address: &str, now: TimestampMs) -> Option<&MempoolEntry> {
        self.drop_if_expired(address, now);
        self.entries.get(address)
    }

    /// Removes the entry for `address`, if any.
    pub fn remove(&mut self, address: &str) -> Option<MempoolEntry> {
        self.entries.remove(address)
    }

    /// Removes every expired entry. Returns the purged addresses, sorted.
    pub fn purge_expired(&mut self, now: TimestampMs) -> Vec<Address> {
        let mut expired: Vec<Address> = self
            .entries
            .values()
            .filter(|entry| entry.is_expired(now))
            .map(|entry| entry.wallet_address.clone())
            .collect();

        for address in &expired {
            self.entries.remove(address);
        }
        expired.sort();
        expired
    }

    pub fn grant(&mut self, address: &str) {
        self.grants.insert(address.to_string());
    }

    pub fn has_grant(&self, address: &str) -> bool {
        self.grants.contains(address)
    }

    /// Removes the grant. Returns false if there was none.
    pub fn consume_grant(&mut self, address: &str) -> bool {
        self.grants.remove(address)
    }

    /// Entries in address order, including ones not yet swept.
    pub fn entries(&self) -> Vec<&MempoolEntry> {
        let mut entries: Vec<&MempoolEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.wallet_address.cmp(&b.wallet_address));
        entries
    }

    /// Granted addresses in order.
    pub fn grants(&self) -> impl Iterator<Item = &Address> {
        self.grants.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn drop_if_expired(&mut self, address: &str, now: TimestampMs) {
        if self
            .entries
            .get(address)
            .is_some_and(|entry| entry.is_expired(now))
        {
            self.entries.remove(address);
            tracing::debug!("[sl-02] ⌛ Request for {} expired", address);
        }
    }
}
