//! vprog: generate vertical learning progression notes for math curriculum sections.
//!
//! A request (grade level, current section, up to three parent and three
//! grandparent sections) is rendered into a fixed instructional prompt and sent
//! to a text-completion service in a single blocking call.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOutcome, GradeSummary};
pub use domain::{
    AppConfig, AppError, CompletionConfig, GradeBand, GradeLevel, Prompt, ProgressionRequest,
    ReferenceDocumentSet, SectionDescriptor, resolve_references,
};
pub use ports::{CompletionClient, CompletionRequest, CompletionResponse, ProgressionSurface};

// =============================================================================
// Prompt API
// =============================================================================

/// Render the prompt for a request without contacting the completion service.
///
/// Identical requests always produce byte-identical prompts.
pub fn compile_prompt(request: &ProgressionRequest) -> Result<Prompt, AppError> {
    app::api::preview_prompt(request)
}

// =============================================================================
// Generate API
// =============================================================================

/// Generate a vertical progression analysis.
///
/// Requires a complete current section. Reads `ANTHROPIC_API_KEY` from the
/// environment and performs exactly one completion request; the raw text of
/// the first response segment is returned unchanged.
pub fn generate_progression(
    request: &ProgressionRequest,
    config: &CompletionConfig,
) -> Result<String, AppError> {
    app::api::generate_progression(request, config)
}

/// Generate with an injected completion client.
pub fn generate_progression_with<C: CompletionClient>(
    client: C,
    request: &ProgressionRequest,
    config: &CompletionConfig,
) -> Result<String, AppError> {
    let ctx = app::AppContext::new(client, adapters::MinijinjaTemplateRenderer::new(), config.clone());
    request.ensure_current_section()?;
    app::commands::generate::execute(&ctx, request)
}
