//! # Adapters Module
//!
//! `KeyValueStore` implementations shipped with the crate.

pub mod storage;

pub use storage::{FileBackedKVStore, InMemoryKVStore};
