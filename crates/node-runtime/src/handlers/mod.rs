//! # Background Handlers
//!
//! Long-running tasks spawned by the runtime.

pub mod expiry_sweep;

pub use expiry_sweep::ExpirySweepHandler;
