//! # Message Digest
//!
//! The digest signed by Bitcoin wallets for arbitrary text.

use sha2::{Digest, Sha256};

/// Prefix prepended to every signed message (length byte included).
pub const MESSAGE_PREFIX: &[u8] = b"\x18Bitcoin Signed Message:\n";

/// Double SHA-256 of the prefixed, length-framed message.
pub fn magic_hash(message: &str) -> [u8; 32] {
    let bytes = message.as_bytes();

    let mut framed = Vec::with_capacity(MESSAGE_PREFIX.len() + 9 + bytes.len());
    framed.extend_from_slice(MESSAGE_PREFIX);
    write_varint(&mut framed, bytes.len() as u64);
    framed.extend_from_slice(bytes);

    Sha256::digest(Sha256::digest(&framed)).into()
}

/// Bitcoin CompactSize encoding.
fn write_varint(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}
