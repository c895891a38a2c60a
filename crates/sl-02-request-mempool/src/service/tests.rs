//! # Request Mempool Service Tests

use super::*;
use crate::ports::outbound::MockSignatureVerifier;
use shared_types::ManualTimeSource;
use std::sync::Arc;

const START_MS: u64 = 1_532_296_090_000;
const ADDR: &str = "142BDCeSGbXjWKaAnYXbMpZ6sbrSAo3DpZ";

type TestService = RequestMempoolService<MockSignatureVerifier, Arc<ManualTimeSource>>;

fn make_test_service() -> (TestService, Arc<ManualTimeSource>) {
    let clock = Arc::new(ManualTimeSource::new(START_MS));
    let deps = RequestMempoolDependencies {
        verifier: MockSignatureVerifier,
        time_source: clock.clone(),
    };
    (RequestMempoolService::new(deps, MempoolConfig::default()), clock)
}

fn sign(service: &mut TestService, address: &str) -> String {
    let entry = service.lookup(address).expect("pending request");
    MockSignatureVerifier::sign(&entry.message, address)
}

#[test]
fn test_request_validation_creates_entry() {
    let (mut service, _) = make_test_service();

    let view = service.request_validation(ADDR).unwrap();
    assert_eq!(view.wallet_address, ADDR);
    assert_eq!(view.request_timestamp, START_MS);
    assert_eq!(view.message, format!("{}:{}:starRegistry", ADDR, START_MS));
    assert_eq!(view.validation_window, 300_000);
}

#[test]
fn test_repeat_request_keeps_message_and_shrinks_window() {
    let (mut service, clock) = make_test_service();
    let first = service.request_validation(ADDR).unwrap();

    clock.advance(60_000);
    let second = service.request_validation(ADDR).unwrap();

    assert_eq!(second.message, first.message);
    assert_eq!(second.request_timestamp, first.request_timestamp);
    assert_eq!(second.request_timestamp_expire, first.request_timestamp_expire);
    assert_eq!(second.validation_window, 240_000);
}

#[test]
fn test_request_after_expiry_starts_fresh() {
    let (mut service, clock) = make_test_service();
    let first = service.request_validation(ADDR).unwrap();

    clock.advance(300_000);
    let second = service.request_validation(ADDR).unwrap();

    assert_ne!(second.message, first.message);
    assert_eq!(second.validation_window, 300_000);
}

#[test]
fn test_empty_address_rejected() {
    let (mut service, _) = make_test_service();
    assert_eq!(
        service.request_validation(""),
        Err(MempoolError::InvalidInput { field: "address" })
    );
    assert!(service.entries_snapshot().is_empty());
}

#[test]
fn test_lookup_purges_expired_entry() {
    let (mut service, clock) = make_test_service();
    service.request_validation(ADDR).unwrap();

    clock.advance(299_999);
    assert!(service.lookup(ADDR).is_some());

    clock.advance(1);
    assert!(service.lookup(ADDR).is_none());
    assert!(service.entries_snapshot().is_empty());
}

#[test]
fn test_verify_and_grant_success_keeps_entry() {
    let (mut service, clock) = make_test_service();
    service.request_validation(ADDR).unwrap();
    let signature = sign(&mut service, ADDR);

    clock.advance(10_000);
    let verified = service.verify_and_grant(ADDR, &signature).unwrap();

    assert!(verified.message_signature);
    assert_eq!(verified.request.wallet_address, ADDR);
    assert_eq!(verified.request.validation_window, 290_000);
    assert!(service.has_grant(ADDR));
    assert!(service.lookup(ADDR).is_some());
}

#[test]
fn test_bad_signature_is_unverified_and_keeps_entry() {
    let (mut service, _) = make_test_service();
    service.request_validation(ADDR).unwrap();

    let result = service.verify_and_grant(ADDR, "not-a-signature");
    assert!(matches!(result, Err(MempoolError::Unverified { .. })));
    assert!(!service.has_grant(ADDR));
    assert!(service.lookup(ADDR).is_some());

    // A correct signature still works afterwards.
    let signature = sign(&mut service, ADDR);
    assert!(service.verify_and_grant(ADDR, &signature).is_ok());
}

#[test]
fn test_verify_without_request() {
    let (mut service, _) = make_test_service();
    let result = service.verify_and_grant(ADDR, "sig");
    assert_eq!(
        result,
        Err(MempoolError::NoPendingRequest {
            address: ADDR.to_string()
        })
    );
}

#[test]
fn test_verify_after_expiry_is_no_pending_request() {
    let (mut service, clock) = make_test_service();
    service.request_validation(ADDR).unwrap();
    let signature = sign(&mut service, ADDR);

    clock.advance(300_001);
    let result = service.verify_and_grant(ADDR, &signature);
    assert!(matches!(result, Err(MempoolError::NoPendingRequest { .. })));
    assert!(!service.has_grant(ADDR));
}

#[test]
fn test_verify_rejects_empty_fields() {
    let (mut service, _) = make_test_service();
    assert_eq!(
        service.verify_and_grant(ADDR, ""),
        Err(MempoolError::InvalidInput { field: "signature" })
    );
    assert_eq!(
        service.verify_and_grant("", "sig"),
        Err(MempoolError::InvalidInput { field: "address" })
    );
}

#[test]
fn test_signature_for_other_address_rejected() {
    let (mut service, _) = make_test_service();
    service.request_validation(ADDR).unwrap();
    service.request_validation("1Other").unwrap();

    let other_sig = sign(&mut service, "1Other");
    let result = service.verify_and_grant(ADDR, &other_sig);
    assert!(matches!(result, Err(MempoolError::Unverified { .. })));
}

#[test]
fn test_grant_survives_entry_expiry() {
    let (mut service, clock) = make_test_service();
    service.request_validation(ADDR).unwrap();
    let signature = sign(&mut service, ADDR);
    service.verify_and_grant(ADDR, &signature).unwrap();

    clock.advance(600_000);
    assert_eq!(service.purge_expired(), vec![ADDR.to_string()]);
    assert!(service.has_grant(ADDR));
    assert_eq!(service.grants_snapshot(), vec![ADDR.to_string()]);
}

#[test]
fn test_consume_and_revoke_are_idempotent() {
    let (mut service, _) = make_test_service();
    service.request_validation(ADDR).unwrap();
    let signature = sign(&mut service, ADDR);
    service.verify_and_grant(ADDR, &signature).unwrap();

    service.consume_grant(ADDR);
    service.consume_grant(ADDR);
    service.revoke_request(ADDR);
    service.revoke_request(ADDR);

    assert!(!service.has_grant(ADDR));
    assert!(service.lookup(ADDR).is_none());
    assert!(service.grants_snapshot().is_empty());
}

#[test]
fn test_entries_snapshot_sorted_with_live_windows() {
    let (mut service, clock) = make_test_service();
    service.request_validation("1b").unwrap();
    clock.advance(1_000);
    service.request_validation("1a").unwrap();

    let snapshot = service.entries_snapshot();
    let addresses: Vec<&str> = snapshot.iter().map(|v| v.wallet_address.as_str()).collect();
    assert_eq!(addresses, vec!["1a", "1b"]);
    assert_eq!(snapshot[0].validation_window, 300_000);
    assert_eq!(snapshot[1].validation_window, 299_000);
}
