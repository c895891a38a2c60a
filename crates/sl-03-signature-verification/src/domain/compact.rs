//! # Compact Recoverable Signatures
//!
//! 65 bytes: `header || r || s`, base64 encoded. The header packs the
//! recovery id and whether the signer's address uses the compressed key:
//!
//! | Header | Key encoding | Recovery id |
//! |--------|--------------|-------------|
//! | 27-30 | uncompressed | header - 27 |
//! | 31-34 | compressed | header - 31 |

use super::errors::SignatureError;
use super::message::magic_hash;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

const COMPACT_LEN: usize = 65;
const HEADER_BASE: u8 = 27;
const COMPRESSED_FLAG: u8 = 4;

/// A parsed compact signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactSignature {
    signature: Signature,
    recovery_id: RecoveryId,
    compressed: bool,
}

impl CompactSignature {
    pub fn from_base64(encoded: &str) -> Result<Self, SignatureError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|_| SignatureError::InvalidEncoding)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != COMPACT_LEN {
            return Err(SignatureError::InvalidLength(bytes.len()));
        }

        let header = bytes[0];
        if !(HEADER_BASE..HEADER_BASE + 8).contains(&header) {
            return Err(SignatureError::InvalidHeader(header));
        }
        let compressed = header >= HEADER_BASE + COMPRESSED_FLAG;
        let recovery_id = RecoveryId::from_byte((header - HEADER_BASE) & 3)
            .ok_or(SignatureError::InvalidHeader(header))?;

        // Rejects r or s of zero or >= n.
        let signature =
            Signature::from_slice(&bytes[1..]).map_err(|_| SignatureError::InvalidFormat)?;

        Ok(Self {
            signature,
            recovery_id,
            compressed,
        })
    }

    pub fn to_base64(&self) -> String {
        let mut header = HEADER_BASE + self.recovery_id.to_byte();
        if self.compressed {
            header += COMPRESSED_FLAG;
        }

        let mut bytes = Vec::with_capacity(COMPACT_LEN);
        bytes.push(header);
        bytes.extend_from_slice(&self.signature.to_bytes());
        STANDARD.encode(bytes)
    }

    /// Whether the signer's address hashes the compressed public key.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }
}

/// Recovers the public key that produced `signature` over `message`.
pub fn recover_public_key(
    message: &str,
    signature: &CompactSignature,
) -> Result<VerifyingKey, SignatureError> {
    let digest = magic_hash(message);
    let (sig, recovery_id) = normalize(signature.signature, signature.recovery_id);

    VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)
}

/// Signs `message` the way a wallet does and returns the base64 signature.
pub fn sign_message(
    key: &SigningKey,
    message: &str,
    compressed: bool,
) -> Result<String, SignatureError> {
    let digest = magic_hash(message);
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(&digest)
        .map_err(|_| SignatureError::InvalidFormat)?;
    let (signature, recovery_id) = normalize(signature, recovery_id);

    Ok(CompactSignature {
        signature,
        recovery_id,
        compressed,
    }
    .to_base64())
}

/// Low-S form of the signature. Negating s mirrors R, so the y parity of the
/// recovery id flips with it.
fn normalize(signature: Signature, recovery_id: RecoveryId) -> (Signature, RecoveryId) {
    match signature.normalize_s() {
        Some(low) => (
            low,
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
        ),
        None => (signature, recovery_id),
    }
}
