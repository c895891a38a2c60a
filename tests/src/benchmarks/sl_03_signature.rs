//! # SL-03 Signature Verification Benchmarks
//!
//! Bitcoin signed-message verification: base64 decode, key recovery,
//! hash160 and address comparison.

use criterion::{black_box, Criterion};
use sl_03_signature_verification::{magic_hash, BitcoinMessageVerifier};

use crate::fixtures::Wallet;

pub fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("sl-03-signature");
    let verifier = BitcoinMessageVerifier::new();

    let wallet = Wallet::random();
    let message = format!("{}:1532296090000:starRegistry", wallet.address);
    let signature = wallet.sign(&message);

    group.bench_function("verify_valid", |b| {
        b.iter(|| black_box(verifier.verify(&message, &wallet.address, &signature)))
    });

    let other = Wallet::random();
    group.bench_function("verify_wrong_address", |b| {
        b.iter(|| black_box(verifier.verify(&message, &other.address, &signature)))
    });

    group.bench_function("magic_hash", |b| b.iter(|| black_box(magic_hash(&message))));

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_verify(c);
}
