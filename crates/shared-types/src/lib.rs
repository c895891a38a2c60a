//! # Shared Types Crate
//!
//! Types used by more than one Star-Ledger subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identity and time types are defined once here.
//! - **Injected Clock**: nothing reads the system clock directly; every
//!   time-dependent component takes a `TimeSource`, so expiry and timestamps
//!   are deterministic under test.

pub mod entities;
pub mod time;

pub use entities::*;
pub use time::*;
