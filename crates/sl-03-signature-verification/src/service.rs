//! # Bitcoin Message Verifier
//!
//! Facade over the domain functions. `verify_detailed` reports why a check
//! failed; `verify` collapses that to a boolean for the mempool gate.

use crate::domain::address::{decode_address, hash160};
use crate::domain::compact::{recover_public_key, CompactSignature};
use crate::domain::errors::SignatureError;

/// Verifies Bitcoin signed messages against P2PKH addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinMessageVerifier;

impl BitcoinMessageVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Checks that `signature` over `message` was produced by the key behind
    /// `address`.
    pub fn verify_detailed(
        &self,
        message: &str,
        address: &str,
        signature: &str,
    ) -> Result<(), SignatureError> {
        let (_, expected) = decode_address(address)?;
        let compact = CompactSignature::from_base64(signature)?;
        let public_key = recover_public_key(message, &compact)?;

        let encoded = public_key.to_encoded_point(compact.is_compressed());
        if hash160(encoded.as_bytes()) != expected {
            return Err(SignatureError::AddressMismatch);
        }
        Ok(())
    }

    pub fn verify(&self, message: &str, address: &str, signature: &str) -> bool {
        match self.verify_detailed(message, address, signature) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("[sl-03] Signature check failed for {}: {}", address, e);
                false
            }
        }
    }
}
