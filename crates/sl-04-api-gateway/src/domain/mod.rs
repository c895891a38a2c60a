//! Gateway domain: error mapping and wire types.

pub mod error;
pub mod types;
