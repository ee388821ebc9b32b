use crate::domain::{CompletionConfig, TemplateRenderer};
use crate::ports::CompletionClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CompletionClient, R: TemplateRenderer> {
    client: C,
    renderer: R,
    completion: CompletionConfig,
}

impl<C: CompletionClient, R: TemplateRenderer> AppContext<C, R> {
    /// Create a new application context.
    pub fn new(client: C, renderer: R, completion: CompletionConfig) -> Self {
        Self { client, renderer, completion }
    }

    /// Get a reference to the completion client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the completion settings (model, output bound).
    pub fn completion(&self) -> &CompletionConfig {
        &self.completion
    }
}
