//! # Star-Ledger Node Runtime
//!
//! Wires the subsystems into one process and serves the REST API.
//!
//! ## Modular Structure
//!
//! - `container/` - Configuration and subsystem construction
//! - `gate` - Append authorization gate (grant check, append, revoke)
//! - `adapters/` - Port implementations connecting subsystems
//! - `handlers/` - Background tasks (expiry sweep)
//! - `runtime` - Startup, HTTP serving and shutdown
//!
//! ## Registration Flow
//!
//! ```text
//! POST /requestValidation ──→ sl-02 opens a 5-minute challenge
//!            │
//! POST /message-signature/validate ──→ sl-03 verifies ──→ sl-02 grants
//!            │
//! POST /block ──→ AppendGate: chain write lock
//!                   ├─ has_grant?  no  → 401
//!                   ├─ sl-01 append_block
//!                   └─ consume_grant + revoke_request
//! ```

pub mod adapters;
pub mod container;
pub mod gate;
pub mod handlers;
pub mod runtime;

pub use container::{NodeConfig, NodeContainer};
pub use gate::{AppendGate, RegistryError};
pub use runtime::NodeRuntime;
