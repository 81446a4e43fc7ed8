use std::fmt;
use std::time::Duration;

use crate::config::NameGenConfig;

/// Path of the username-based generator endpoint.
const GENERATOR_PATH: &str = "/api/2946/game+name+generator+api/3089/username+generator";

/// Returned when the response carries none of the known name fields.
pub const FALLBACK_NAME: &str = "Generated Game Name";

/// Response fields that may carry the name, in lookup order.
const NAME_FIELDS: [&str; 3] = ["game_name", "name", "result"];

#[derive(Debug)]
pub enum NameGenError {
    MissingUsername,
    MissingApiKey,
    /// The HTTP client could not be built.
    Client(String),
    Request(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for NameGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUsername => write!(f, "Please enter a username to generate a game name"),
            Self::MissingApiKey => write!(f, "Please enter your name generator API key"),
            Self::Client(e) => write!(f, "failed to build HTTP client: {e}"),
            Self::Request(e) => write!(f, "name generator request failed: {e}"),
            Self::Status(code) => write!(f, "name generator returned HTTP {code}"),
            Self::Decode(e) => write!(f, "invalid name generator response: {e}"),
        }
    }
}

impl std::error::Error for NameGenError {}

impl NameGenError {
    /// Whether the caller supplied bad input, as opposed to an upstream failure.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingUsername | Self::MissingApiKey)
    }
}

/// First non-empty string among the known name fields, else the fallback.
pub fn probe_name(body: &serde_json::Value) -> String {
    NAME_FIELDS
        .iter()
        .find_map(|field| {
            body.get(field)
                .and_then(|v| v.as_str())
                .filter(|name| !name.is_empty())
        })
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

/// Client for the external game-name generator.
#[derive(Debug, Clone)]
pub struct NameGenClient {
    config: NameGenConfig,
    client: reqwest::Client,
}

impl NameGenClient {
    pub fn new(config: NameGenConfig) -> Result<Self, NameGenError> {
        let client = reqwest::Client::builder()
            .user_agent("indic-namegen/0.1")
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| NameGenError::Client(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}{GENERATOR_PATH}", self.config.base_url.trim_end_matches('/'))
    }

    /// Generate a game name for `username`. `api_key` overrides the
    /// configured key when present and non-blank.
    pub async fn generate(
        &self,
        username: &str,
        api_key: Option<&str>,
    ) -> Result<String, NameGenError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(NameGenError::MissingUsername);
        }
        let key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(self.config.api_key.trim());
        if key.is_empty() {
            return Err(NameGenError::MissingApiKey);
        }

        let resp = self
            .client
            .get(self.endpoint())
            .query(&[("username", username)])
            .header("Authorization", format!("Bearer {key}"))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| NameGenError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Name generator returned an error status");
            return Err(NameGenError::Status(status.as_u16()));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| NameGenError::Decode(e.to_string()))?;
        let name = probe_name(&body);
        tracing::debug!(username, name = %name, "Generated game name");
        Ok(name)
    }
}
