//! Environment-backed configuration for the generation capability.
//!
//! One credential is mandatory (`API_KEY`); model and endpoint have sane
//! defaults so a bare `.env` with a key is enough to run.

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variables: {0}")]
    MissingVariables(String),

    #[error("Invalid API_URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl Config {
    /// Builds a config from the process environment, reading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("API_KEY")
            .map_err(|_| ConfigError::MissingVariables("API_KEY".to_string()))?;
        let model = std::env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let request_timeout_seconds = std::env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Url::parse(&api_url).map_err(|e| ConfigError::InvalidUrl {
            url: api_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { api_key, model, api_url, request_timeout_seconds })
    }

    /// Config for tests and offline use; never talks to a real endpoint.
    pub fn for_tests() -> Self {
        Self {
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_seconds: 5,
        }
    }
}

/// Checks that the required environment variables are present without
/// constructing a full [`Config`]. Returns the missing names on failure.
pub fn validate_environment() -> Result<(), ConfigError> {
    let required_vars = ["API_KEY"];
    let mut missing_vars = Vec::new();

    for var in &required_vars {
        if std::env::var(var).is_err() {
            missing_vars.push(*var);
        }
    }

    if missing_vars.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingVariables(missing_vars.join(", ")))
    }
}
