//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{HttpCompletionClient, MinijinjaTemplateRenderer, load_app_config};
use crate::app::AppContext;
use crate::app::commands::{catalog, generate};
use crate::domain::{
    AppConfig, AppError, CompletionConfig, Prompt, ProgressionRequest, ReferenceDocumentSet,
};
use crate::ports::ProgressionSurface;

pub use crate::app::commands::catalog::GradeSummary;
pub use crate::app::commands::generate::GenerateOutcome;

type HttpContext = AppContext<HttpCompletionClient, MinijinjaTemplateRenderer>;

/// Create an `AppContext` backed by the Messages API.
///
/// The credential is read from `ANTHROPIC_API_KEY` here, once; a missing key
/// only fails when a completion is attempted.
fn create_context(config: &CompletionConfig) -> Result<HttpContext, AppError> {
    let client = HttpCompletionClient::from_env_with_config(config)?;
    Ok(AppContext::new(client, MinijinjaTemplateRenderer::new(), config.clone()))
}

/// Load configuration from an explicit file or `vprog.toml` in the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    load_app_config(explicit, &std::env::current_dir()?)
}

/// Render the prompt for a request without any outbound call.
pub fn preview_prompt(request: &ProgressionRequest) -> Result<Prompt, AppError> {
    request.validate()?;
    Ok(crate::domain::compile_prompt(request, &MinijinjaTemplateRenderer::new())?)
}

/// Generate a vertical progression analysis and return the raw model text.
pub fn generate_progression(
    request: &ProgressionRequest,
    config: &CompletionConfig,
) -> Result<String, AppError> {
    let ctx = create_context(config)?;
    request.ensure_current_section()?;
    generate::execute(&ctx, request)
}

/// Run the full generate action, presenting every outcome on `surface`.
pub fn run_generate<S>(
    request: &ProgressionRequest,
    config: &CompletionConfig,
    surface: &mut S,
) -> Result<GenerateOutcome, AppError>
where
    S: ProgressionSurface + ?Sized,
{
    let ctx = create_context(config)?;
    generate::handle(&ctx, request, surface)
}

/// List the supported grade levels.
pub fn list_grades() -> Vec<GradeSummary> {
    catalog::list_grades()
}

/// Reference documents for a grade label.
pub fn references(grade: &str) -> ReferenceDocumentSet {
    catalog::references(grade)
}
