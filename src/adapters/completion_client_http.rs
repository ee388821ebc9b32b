//! Messages API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ANTHROPIC_VERSION, API_KEY_ENV, AppError, CompletionConfig};
use crate::ports::{CompletionClient, CompletionRequest, CompletionResponse};

const X_API_KEY: &str = "x-api-key";
const ANTHROPIC_VERSION_HEADER: &str = "anthropic-version";
const DEFAULT_STATUS_MESSAGE: &str = "Completion request failed";

/// HTTP transport for the Messages API.
///
/// This client performs exactly one request per call and never retries.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: Option<String>,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given credential and configuration.
    ///
    /// A missing credential is reported when a request is attempted, not here.
    pub fn new(api_key: Option<String>, config: &CompletionConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::completion_error(format!("Failed to create HTTP client: {}", e), None)
            })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the `ANTHROPIC_API_KEY` environment variable.
    pub fn from_env_with_config(config: &CompletionConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.trim().is_empty());
        Self::new(api_key, config)
    }

    fn send_request(&self, api_key: &str, request: &ApiRequest) -> Result<CompletionResponse, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(X_API_KEY, api_key)
            .header(ANTHROPIC_VERSION_HEADER, ANTHROPIC_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::completion_error(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                AppError::completion_error(
                    format!("Failed to parse response: {}", e),
                    Some(status.as_u16()),
                )
            })?;

            // Only text blocks become segments; tool-use and other blocks are dropped.
            let segments = api_response.content.into_iter().filter_map(|block| block.text).collect();

            return Ok(CompletionResponse { segments, stop_reason: api_response.stop_reason });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::completion_error(message, Some(status.as_u16())))
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<ApiMessage>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))?;

        let api_request = ApiRequest {
            model: request.model,
            max_tokens: request.max_tokens,
            system: request.system,
            messages: vec![ApiMessage { role: "user", content: request.prompt }],
            stream: false,
        };

        self.send_request(api_key, &api_request)
    }
}
