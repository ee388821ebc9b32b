use std::io;

use thiserror::Error;

use crate::domain::prompt::PromptAssemblyError;

/// Library-wide error type for vprog operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file given explicitly but not present.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// Request file given explicitly but not present.
    #[error("Request file not found: {0}")]
    RequestFileNotFound(String),

    /// Request input is structurally invalid (e.g. too many ancestor sections).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The current section identifier or overview is missing.
    #[error("Please fill in the Current Section ID and Overview.")]
    IncompleteCurrentSection,

    /// Prompt assembly failed.
    #[error(transparent)]
    PromptAssembly(#[from] PromptAssemblyError),

    /// Credential for the completion service is not available.
    #[error("Environment variable '{0}' is not set; the completion service requires an API key")]
    EnvironmentVariableMissing(String),

    /// Completion service request failed.
    #[error("{message}")]
    CompletionApiError { message: String, status: Option<u16> },

    /// Interactive input failed or was aborted.
    #[error("Failed to read {what}: {details}")]
    InteractiveInput { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub(crate) fn completion_error<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::CompletionApiError { message: message.into(), status }
    }

    /// Whether this error belongs to the outbound completion call.
    ///
    /// Every cause of a failed call collapses into this single class.
    pub fn is_completion_failure(&self) -> bool {
        matches!(
            self,
            AppError::CompletionApiError { .. } | AppError::EnvironmentVariableMissing(_)
        )
    }
}
