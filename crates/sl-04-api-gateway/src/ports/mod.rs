//! Ports for the API gateway.

pub mod outbound;
