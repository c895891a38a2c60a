//! # Adapter Implementations
//!
//! Concrete implementations of the subsystems' outbound ports:
//!
//! | Adapter | Port | Owner |
//! |---------|------|-------|
//! | `BitcoinSignatureAdapter` | `SignatureVerifier` | sl-02 |
//! | `RegistryAdapter` | `RegistryBackend` | sl-04 |
//! | `RocksDbStore` | `KeyValueStore` | sl-01 |

pub mod registry;
pub mod signature;
pub mod storage;

pub use registry::RegistryAdapter;
pub use signature::BitcoinSignatureAdapter;
