use serde::{Deserialize, Serialize};

/// Configuration for the game-name generator client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameGenConfig {
    /// Scheme and host of the name API, without a trailing path.
    pub base_url: String,
    /// Bearer key sent when a request does not carry its own.
    pub api_key: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NameGenConfig {
    fn default() -> Self {
        Self {
            base_url: "https://zylalabs.com".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}
