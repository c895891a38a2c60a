//! # Star-Ledger Benchmarks
//!
//! Criterion groups per subsystem, registered from `benches/ledger_benchmarks.rs`.

pub mod sl_01_chain_storage;
pub mod sl_03_signature;
