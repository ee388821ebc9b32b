use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{CompletionClient, CompletionRequest, CompletionResponse};

/// Scripted completion client that records every request it receives.
#[derive(Clone)]
pub struct FakeCompletionClient {
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    outcome: FakeOutcome,
}

#[derive(Clone)]
enum FakeOutcome {
    Respond(CompletionResponse),
    Fail { message: String, status: Option<u16> },
}

impl FakeCompletionClient {
    pub fn responding(text: impl Into<String>) -> Self {
        Self::with_response(CompletionResponse::from_text(text))
    }

    pub fn with_response(response: CompletionResponse) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), outcome: FakeOutcome::Respond(response) }
    }

    pub fn failing(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            outcome: FakeOutcome::Fail { message: message.into(), status },
        }
    }

    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError> {
        self.requests.lock().unwrap().push(request);
        match &self.outcome {
            FakeOutcome::Respond(response) => Ok(response.clone()),
            FakeOutcome::Fail { message, status } => {
                Err(AppError::CompletionApiError { message: message.clone(), status: *status })
            }
        }
    }
}
