//! # Domain Layer
//!
//! Pure domain logic for the chain storage subsystem.
//!
//! ## Modules
//!
//! - `block` - Block entity and its tagged payload
//! - `codec` - Canonical serialization and block digest
//! - `validation` - Chain validation report
//! - `value_objects` - Configuration
//! - `errors` - Domain error types

pub mod block;
pub mod codec;
pub mod errors;
pub mod validation;
pub mod value_objects;
