//! Application configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Environment variable holding the completion service credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Messages API version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// System directive sent with every completion request.
pub const SYSTEM_DIRECTIVE: &str =
    "You are a curriculum developer and expert in vertical progressions of learning.";

/// Configuration loaded from `vprog.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Completion service configuration.
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()
    }
}

/// Completion service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Messages endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on generated output tokens.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
        }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.max_tokens == 0 {
            return Err(AppError::InvalidConfig("max_tokens must be greater than 0".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.anthropic.com/v1/messages").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_timeout() -> u64 {
    600
}
