//! # Signature Verification (sl-03)
//!
//! Verifies Bitcoin signed messages: a base64 compact signature over
//! `"\x18Bitcoin Signed Message:\n" || varint(len) || message`, checked by
//! recovering the public key and comparing its HASH160 against the claimed
//! base58check P2PKH address.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): message digest, address codec, compact
//!   signature parsing and recovery. No I/O.
//! - **Service** (`service.rs`): `BitcoinMessageVerifier`, the boolean facade
//!   the runtime plugs into the mempool.
//!
//! ## Security Notes
//!
//! - High-S signatures are normalized before recovery rather than rejected,
//!   matching wallets that never enforced low-S on messages.
//! - Every malformed input verifies as `false`; nothing panics on user data.

pub mod domain;
pub mod service;

pub use domain::address::{decode_address, hash160, p2pkh_address, MAINNET_P2PKH_VERSION};
pub use domain::compact::{recover_public_key, sign_message, CompactSignature};
pub use domain::errors::SignatureError;
pub use domain::message::{magic_hash, MESSAGE_PREFIX};
pub use service::BitcoinMessageVerifier;
