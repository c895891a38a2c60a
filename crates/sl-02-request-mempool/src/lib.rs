//! # Request Mempool (sl-02)
//!
//! Tracks pending authorization requests per wallet address, verifies the
//! signed challenge message against the claimed address and hands out
//! one-time write grants that the append gate consumes.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | 1 | One Live Entry Per Address | `domain/pool.rs` - `insert_or_get()` |
//! | 2 | Expired Entries Are Invisible | `domain/pool.rs` - `live_entry()` purges on read |
//! | 3 | Grant Only After Verification | `service/mod.rs` - `verify_and_grant()` |
//! | 4 | Grants Are Single Use | consumed by the append gate after one append |
//!
//! ## Request Lifecycle
//!
//! ```text
//! [ABSENT] ──request_validation──→ [PENDING] ──verify_and_grant──→ [PENDING + GRANTED]
//!                                      │                                  │
//!                                      └──── deadline passes ──→ [ABSENT] │
//!                                                                         │
//!                      append gate: consume_grant + revoke_request ←──────┘
//! ```
//!
//! Entries and grants are tracked separately. A grant outlives the entry that
//! produced it; only a successful append (or an explicit revoke) removes it.
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `SignatureVerifier` | Checks `(message, address, signature)` |
//! | `shared_types::TimeSource` | Request timestamps and deadlines |

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::entities::{MempoolEntry, ValidationRequestView, VerifiedRequest};
pub use domain::errors::MempoolError;
pub use domain::pool::RequestPool;
pub use domain::value_objects::{MempoolConfig, DEFAULT_REGISTRY_TAG, DEFAULT_VALIDATION_WINDOW_MS};
pub use ports::inbound::RequestMempoolApi;
pub use ports::outbound::SignatureVerifier;
pub use service::{RequestMempoolDependencies, RequestMempoolService};
