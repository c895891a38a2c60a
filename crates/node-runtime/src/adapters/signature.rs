//! Bridges sl-03 Bitcoin message verification into the mempool's
//! `SignatureVerifier` port.

use sl_02_request_mempool::SignatureVerifier;
use sl_03_signature_verification::BitcoinMessageVerifier;

/// `SignatureVerifier` backed by [`BitcoinMessageVerifier`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinSignatureAdapter {
    inner: BitcoinMessageVerifier,
}

impl BitcoinSignatureAdapter {
    pub fn new() -> Self {
        Self {
            inner: BitcoinMessageVerifier::new(),
        }
    }
}

impl SignatureVerifier for BitcoinSignatureAdapter {
    fn verify(&self, message: &str, address: &str, signature: &str) -> bool {
        self.inner.verify(message, address, signature)
    }
}
