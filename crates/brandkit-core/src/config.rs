//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Read-only configuration consumed at startup: where the API lives and how
/// long a request may take before its transport call is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL prepended to relative request paths.
    pub api_base_url: String,
    /// Default timeout applied to every request unless overridden per call.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Returns the base URL without a trailing slash, so joining with
    /// `/api/...` paths never produces a double slash.
    pub fn normalized_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_base_url_strips_trailing_slash() {
        let config = ClientConfig {
            api_base_url: "https://api.example.com/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.normalized_base_url(), "https://api.example.com");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ClientConfig = toml::from_str("api_base_url = \"https://api.example.com\"")
            .expect("partial config should parse");
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }
}
