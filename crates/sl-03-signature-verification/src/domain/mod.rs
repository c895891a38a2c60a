//! Pure Bitcoin message-signing logic.

pub mod address;
pub mod compact;
pub mod errors;
pub mod message;
