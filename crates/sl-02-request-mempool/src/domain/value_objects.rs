//! Value objects for the request mempool.

/// Five minutes, in milliseconds.
pub const DEFAULT_VALIDATION_WINDOW_MS: u64 = 5 * 60 * 1000;

/// Suffix of every challenge message.
pub const DEFAULT_REGISTRY_TAG: &str = "starRegistry";

/// Mempool configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MempoolConfig {
    /// How long a validation request stays live after creation.
    pub validation_window_ms: u64,
    /// Last component of `"{address}:{timestamp}:{tag}"`.
    pub registry_tag: String,
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            validation_window_ms: DEFAULT_VALIDATION_WINDOW_MS,
            registry_tag: DEFAULT_REGISTRY_TAG.to_string(),
        }
    }
}

impl MempoolConfig {
    /// Creates a config with a custom window and the default tag.
    pub fn with_window_ms(validation_window_ms: u64) -> Self {
        Self {
            validation_window_ms,
            ..Self::default()
        }
    }

    /// Builds the challenge message a client must sign.
    pub fn challenge_message(&self, address: &str, request_timestamp: u64) -> String {
        format!("{}:{}:{}", address, request_timestamp, self.registry_tag)
    }
}
