//! Domain layer for the request mempool.

pub mod entities;
pub mod errors;
pub mod pool;
pub mod value_objects;
