//! # SL-01 Chain Storage Benchmarks
//!
//! - Append cost on a growing chain
//! - Full-scan hash lookup and validation as the chain grows

use std::sync::Arc;

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use shared_types::SystemTimeSource;
use sl_01_chain_storage::{
    BlockBody, ChainConfig, ChainStorageApi, ChainStorageDependencies, ChainStorageService,
    InMemoryKVStore,
};

type BenchChain = ChainStorageService<InMemoryKVStore, Arc<SystemTimeSource>>;

fn chain_with(blocks: u64) -> (BenchChain, String) {
    let mut chain = ChainStorageService::new(
        ChainStorageDependencies {
            kv_store: InMemoryKVStore::new(),
            time_source: Arc::new(SystemTimeSource),
        },
        ChainConfig::default(),
    );
    chain.initialize().expect("genesis");

    let mut last_hash = String::new();
    for i in 0..blocks {
        last_hash = chain
            .append_block(BlockBody::text(format!("block {}", i)))
            .expect("append")
            .hash;
    }
    (chain, last_hash)
}

pub fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("sl-01-append");

    group.bench_function("append_text_block", |b| {
        let (mut chain, _) = chain_with(0);
        b.iter(|| black_box(chain.append_block(BlockBody::text("payload")).is_ok()))
    });

    group.finish();
}

pub fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("sl-01-scans");

    for size in [100u64, 1_000] {
        let (chain, last_hash) = chain_with(size);
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("get_block_by_hash", size), &last_hash, |b, hash| {
            b.iter(|| black_box(chain.get_block_by_hash(hash).ok()))
        });

        group.bench_with_input(BenchmarkId::new("validate_chain", size), &size, |b, _| {
            b.iter(|| black_box(chain.validate_chain().map(|r| r.valid).ok()))
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_append(c);
    bench_scans(c);
}
