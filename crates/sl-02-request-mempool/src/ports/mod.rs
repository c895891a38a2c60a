//! Ports (hexagonal boundaries) for the request mempool.

pub mod inbound;
pub mod outbound;
