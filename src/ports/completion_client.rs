//! Completion service port definition.

use crate::domain::AppError;

/// Request for a single-turn, non-streaming completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// System directive framing the model's role.
    pub system: String,
    /// The fully rendered prompt, sent as the only user message.
    pub prompt: String,
    /// Model identifier.
    pub model: String,
    /// Upper bound on generated output tokens.
    pub max_tokens: u32,
}

/// Response from the completion service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Text content segments, in the order returned.
    pub segments: Vec<String>,
    /// Reason the model stopped generating, if reported.
    pub stop_reason: Option<String>,
}

impl CompletionResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { segments: vec![text.into()], stop_reason: None }
    }

    /// Text of the first content segment.
    pub fn first_text(&self) -> Option<&str> {
        self.segments.first().map(|s| s.as_str())
    }
}

/// Port for completion service operations.
pub trait CompletionClient {
    /// Submit one completion request and wait for the full response.
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError> {
        (**self).complete(request)
    }
}
