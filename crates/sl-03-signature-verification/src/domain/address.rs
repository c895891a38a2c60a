//! # P2PKH Addresses
//!
//! `base58check(version || RIPEMD160(SHA256(pubkey)))`.

use super::errors::SignatureError;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Version byte of mainnet pay-to-pubkey-hash addresses (leading `1`).
pub const MAINNET_P2PKH_VERSION: u8 = 0x00;

/// RIPEMD160 of SHA256.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// Encodes a SEC1 public key as a P2PKH address.
pub fn p2pkh_address(public_key: &[u8], version: u8) -> String {
    let mut payload = Vec::with_capacity(21);
    payload.push(version);
    payload.extend_from_slice(&hash160(public_key));
    bs58::encode(payload).with_check().into_string()
}

/// Decodes an address into its version byte and 20-byte key hash.
///
/// Any version byte is accepted; only the checksum and payload size are
/// enforced.
pub fn decode_address(address: &str) -> Result<(u8, [u8; 20]), SignatureError> {
    let payload = bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|e| SignatureError::InvalidAddress(e.to_string()))?;

    if payload.len() != 21 {
        return Err(SignatureError::InvalidAddress(format!(
            "expected 21-byte payload, got {}",
            payload.len()
        )));
    }

    let mut key_hash = [0u8; 20];
    key_hash.copy_from_slice(&payload[1..]);
    Ok((payload[0], key_hash))
}
