//! # Registration Flows
//!
//! Exercises sl-01, sl-02 and sl-03 together through the node container and
//! the append gate, with real secp256k1 signatures.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use node_runtime::{NodeConfig, NodeContainer, RegistryError};
    use shared_types::{ManualTimeSource, TimeSource};
    use sl_01_chain_storage::{ChainStorageApi, FileBackedKVStore, KeyValueStore};
    use sl_02_request_mempool::{MempoolError, RequestMempoolApi};

    use crate::fixtures::{memory_node, star, Wallet, START_MS};

    const WINDOW_MS: u64 = 300_000;

    fn request_and_sign(container: &NodeContainer, wallet: &Wallet) -> String {
        let view = container
            .mempool
            .lock()
            .request_validation(&wallet.address)
            .unwrap();
        wallet.sign(&view.message)
    }

    // =========================================================================
    // HAPPY PATH
    // =========================================================================

    #[test]
    fn test_full_registration_flow() {
        let (container, _, _) = memory_node();
        let wallet = Wallet::random();

        let signature = request_and_sign(&container, &wallet);
        let verified = container
            .mempool
            .lock()
            .verify_and_grant(&wallet.address, &signature)
            .unwrap();
        assert!(verified.message_signature);
        assert_eq!(verified.request.wallet_address, wallet.address);

        let block = container
            .gate()
            .register_star(&wallet.address, star("Found star using https://www.google.com/sky/"))
            .unwrap();
        assert_eq!(block.height, 1);

        let genesis = container.chain.read().get_block_by_height(0).unwrap();
        assert_eq!(block.previous_block_hash, genesis.hash);

        let second = container.gate().register_star(&wallet.address, star("again"));
        assert!(matches!(second, Err(RegistryError::Unauthorized { .. })));

        let report = container.chain.read().validate_chain().unwrap();
        assert!(report.valid);
        assert_eq!(report.blocks_checked, 2);
    }

    #[test]
    fn test_uncompressed_wallet_can_register() {
        let (container, _, _) = memory_node();
        let wallet = Wallet::random_uncompressed();

        let signature = request_and_sign(&container, &wallet);
        container
            .mempool
            .lock()
            .verify_and_grant(&wallet.address, &signature)
            .unwrap();

        container
            .gate()
            .register_star(&wallet.address, star("old-style key"))
            .unwrap();
    }

    #[test]
    fn test_stars_indexed_by_owner() {
        let (container, _, _) = memory_node();
        let alice = Wallet::random();
        let bob = Wallet::random();

        for (wallet, story) in [(&alice, "a1"), (&bob, "b1"), (&alice, "a2")] {
            let signature = request_and_sign(&container, wallet);
            container
                .mempool
                .lock()
                .verify_and_grant(&wallet.address, &signature)
                .unwrap();
            container.gate().register_star(&wallet.address, star(story)).unwrap();
        }

        let chain = container.chain.read();
        let stories: Vec<String> = chain
            .get_blocks_by_address(&alice.address)
            .unwrap()
            .iter()
            .filter_map(|b| b.body.star_record()?.star.decoded_story())
            .collect();
        assert_eq!(stories, vec!["a1", "a2"]);
        assert_eq!(chain.get_blocks_by_address(&bob.address).unwrap().len(), 1);
    }

    // =========================================================================
    // MEMPOOL WINDOW
    // =========================================================================

    #[test]
    fn test_repeated_request_keeps_challenge() {
        let (container, _, clock) = memory_node();
        let wallet = Wallet::random();
        let mut mempool = container.mempool.lock();

        let first = mempool.request_validation(&wallet.address).unwrap();
        clock.advance(60_000);
        let second = mempool.request_validation(&wallet.address).unwrap();

        assert_eq!(first.message, second.message);
        assert_eq!(first.request_timestamp, second.request_timestamp);
        assert_eq!(first.validation_window, WINDOW_MS);
        assert_eq!(second.validation_window, WINDOW_MS - 60_000);
    }

    #[test]
    fn test_expired_request_cannot_be_verified() {
        let (container, _, clock) = memory_node();
        let wallet = Wallet::random();
        let signature = request_and_sign(&container, &wallet);

        clock.advance(WINDOW_MS);
        let mut mempool = container.mempool.lock();
        assert!(mempool.lookup(&wallet.address).is_none());

        let result = mempool.verify_and_grant(&wallet.address, &signature);
        assert_eq!(
            result.unwrap_err(),
            MempoolError::NoPendingRequest {
                address: wallet.address.clone()
            }
        );
        assert!(!mempool.has_grant(&wallet.address));
    }

    #[test]
    fn test_new_request_after_expiry_gets_new_challenge() {
        let (container, _, clock) = memory_node();
        let wallet = Wallet::random();

        let first = container
            .mempool
            .lock()
            .request_validation(&wallet.address)
            .unwrap();
        clock.advance(WINDOW_MS + 1_000);
        let second = container
            .mempool
            .lock()
            .request_validation(&wallet.address)
            .unwrap();

        assert_ne!(first.message, second.message);
        assert_eq!(second.request_timestamp, clock.now_millis());
        assert_eq!(second.request_timestamp, START_MS + WINDOW_MS + 1_000);
    }

    #[test]
    fn test_wrong_signer_rejected_then_owner_accepted() {
        let (container, _, _) = memory_node();
        let owner = Wallet::random();
        let impostor = Wallet::random();

        let view = container
            .mempool
            .lock()
            .request_validation(&owner.address)
            .unwrap();

        let forged = impostor.sign(&view.message);
        let result = container
            .mempool
            .lock()
            .verify_and_grant(&owner.address, &forged);
        assert!(matches!(result, Err(MempoolError::Unverified { .. })));

        container
            .mempool
            .lock()
            .verify_and_grant(&owner.address, &owner.sign(&view.message))
            .unwrap();
        assert!(container.mempool.lock().has_grant(&owner.address));
    }

    // =========================================================================
    // INTEGRITY & PERSISTENCE
    // =========================================================================

    #[test]
    fn test_tampered_star_detected() {
        let (container, store, _) = memory_node();
        let wallet = Wallet::random();
        let signature = request_and_sign(&container, &wallet);
        container
            .mempool
            .lock()
            .verify_and_grant(&wallet.address, &signature)
            .unwrap();
        container
            .gate()
            .register_star(&wallet.address, star("honest"))
            .unwrap();

        let mut handle = store.clone();
        let raw = handle.get(1).unwrap().unwrap();
        let text = String::from_utf8(raw).unwrap();
        let forged = text.replace(&hex::encode("honest"), &hex::encode("forged"));
        handle.put(1, forged.as_bytes()).unwrap();

        let chain = container.chain.read();
        assert!(!chain.validate_block(1).unwrap());
        let report = chain.validate_chain().unwrap();
        assert!(!report.valid);
        assert_eq!(report.failed_heights, vec![1]);
    }

    #[test]
    fn test_file_backed_chain_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.db");
        let wallet = Wallet::random();
        let clock = Arc::new(ManualTimeSource::new(START_MS));

        let tip_hash = {
            let container = NodeContainer::with_parts(
                NodeConfig::default(),
                Box::new(FileBackedKVStore::open(&path).unwrap()),
                clock.clone(),
            );
            container.chain.write().initialize().unwrap();
            let signature = request_and_sign(&container, &wallet);
            container
                .mempool
                .lock()
                .verify_and_grant(&wallet.address, &signature)
                .unwrap();
            container
                .gate()
                .register_star(&wallet.address, star("persisted"))
                .unwrap()
                .hash
        };

        let container = NodeContainer::with_parts(
            NodeConfig::default(),
            Box::new(FileBackedKVStore::open(&path).unwrap()),
            clock,
        );
        let chain = container.chain.read();
        assert_eq!(chain.get_block_height().unwrap(), Some(1));
        assert_eq!(
            chain.get_block_by_hash(&tip_hash).unwrap().map(|b| b.height),
            Some(1)
        );
        assert!(chain.validate_chain().unwrap().valid);

        // Grants are process-local and do not survive the restart.
        assert!(!container.mempool.lock().has_grant(&wallet.address));
    }
}
