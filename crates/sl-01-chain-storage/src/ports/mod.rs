//! # Ports
//!
//! - `inbound` - `ChainStorageApi`, the driving port
//! - `outbound` - `KeyValueStore`, the driven port

pub mod inbound;
pub mod outbound;
