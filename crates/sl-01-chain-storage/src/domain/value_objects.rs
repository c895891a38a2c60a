//! # Value Objects
//!
//! Configuration for the chain storage subsystem.

/// Body of the block written into an empty store.
pub const GENESIS_BODY: &str = "First block in the chain - Genesis block";

/// Configuration for the chain service.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Text payload of the genesis block.
    pub genesis_body: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            genesis_body: GENESIS_BODY.to_string(),
        }
    }
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the genesis payload.
    pub fn with_genesis_body(mut self, body: impl Into<String>) -> Self {
        self.genesis_body = body.into();
        self
    }
}
