//! # Test Fixtures
//!
//! Real secp256k1 wallets and nodes built on an in-memory store and a
//! manual clock.

use std::sync::Arc;

use k256::ecdsa::SigningKey;
use node_runtime::{NodeConfig, NodeContainer};
use shared_types::ManualTimeSource;
use sl_01_chain_storage::{ChainStorageApi, InMemoryKVStore, Star};
use sl_03_signature_verification::{p2pkh_address, sign_message, MAINNET_P2PKH_VERSION};

/// 2018-07-22T21:48:10Z.
pub const START_MS: u64 = 1_532_296_090_000;

/// A P2PKH wallet able to sign Bitcoin messages.
pub struct Wallet {
    key: SigningKey,
    compressed: bool,
    pub address: String,
}

impl Wallet {
    pub fn random() -> Self {
        Self::from_key(SigningKey::random(&mut rand::thread_rng()), true)
    }

    /// Wallet whose address commits to the uncompressed public key.
    pub fn random_uncompressed() -> Self {
        Self::from_key(SigningKey::random(&mut rand::thread_rng()), false)
    }

    fn from_key(key: SigningKey, compressed: bool) -> Self {
        let point = key.verifying_key().to_encoded_point(compressed);
        let address = p2pkh_address(point.as_bytes(), MAINNET_P2PKH_VERSION);
        Self {
            key,
            compressed,
            address,
        }
    }

    /// Base64 compact signature over `message`.
    pub fn sign(&self, message: &str) -> String {
        sign_message(&self.key, message, self.compressed).expect("signing succeeds")
    }
}

/// Node over an in-memory store with genesis written.
pub fn memory_node() -> (NodeContainer, InMemoryKVStore, Arc<ManualTimeSource>) {
    let store = InMemoryKVStore::new();
    let clock = Arc::new(ManualTimeSource::new(START_MS));
    let container =
        NodeContainer::with_parts(NodeConfig::default(), Box::new(store.clone()), clock.clone());
    container
        .chain
        .write()
        .initialize()
        .expect("genesis written");
    (container, store, clock)
}

/// A star with a plain-text story, as submitted by a client.
pub fn star(story: &str) -> Star {
    Star {
        ra: "16h 29m 1.0s".into(),
        dec: "-26° 29' 24.9".into(),
        magnitude: None,
        constellation: None,
        story: story.into(),
    }
}
