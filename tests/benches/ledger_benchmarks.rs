//! # Star-Ledger Benchmarks
//!
//! | Subsystem | Measured |
//! |-----------|----------|
//! | sl-01 Chain Storage | append, hash lookup scan, full validation |
//! | sl-03 Signature Verification | signed-message verify, magic hash |

use criterion::{criterion_group, criterion_main, Criterion};
use sl_tests::benchmarks::{sl_01_chain_storage, sl_03_signature};

fn chain_storage(c: &mut Criterion) {
    sl_01_chain_storage::register_benchmarks(c);
}

fn signature(c: &mut Criterion) {
    sl_03_signature::register_benchmarks(c);
}

criterion_group!(benches, chain_storage, signature);
criterion_main!(benches);
