//! # Star-Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Wallets and in-memory nodes
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! └── integration/      # Cross-crate registration flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sl-tests
//! cargo test -p sl-tests integration::http
//! cargo bench -p sl-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
