//! Prompt compilation and the single completion call behind `vprog generate`.

use tracing::{debug, error, info};

use crate::app::AppContext;
use crate::domain::{
    AppError, Prompt, ProgressionRequest, SYSTEM_DIRECTIVE, TemplateRenderer, compile_prompt,
    resolve_references,
};
use crate::ports::{CompletionClient, CompletionRequest, ProgressionSurface};

const PROGRESS_MESSAGE: &str = "Generating vertical progression analysis...";

/// Result of one user-initiated generate action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The model produced text; it was shown to the user.
    Generated { text: String },
    /// The current section was incomplete; no request was made.
    Incomplete,
    /// The completion call failed; nothing was rendered.
    Failed { message: String },
}

impl GenerateOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateOutcome::Generated { .. } => 0,
            GenerateOutcome::Failed { .. } => 1,
            GenerateOutcome::Incomplete => 2,
        }
    }
}

/// Compile the prompt for a request without contacting the completion service.
pub fn preview<C, R>(ctx: &AppContext<C, R>, request: &ProgressionRequest) -> Result<Prompt, AppError>
where
    C: CompletionClient,
    R: TemplateRenderer,
{
    request.validate()?;
    Ok(compile_prompt(request, ctx.renderer())?)
}

/// Compile the prompt and submit it as one completion request.
///
/// Returns the text of the first response segment. Performs exactly one
/// outbound call, with no retry and no validation of the returned text.
pub fn execute<C, R>(ctx: &AppContext<C, R>, request: &ProgressionRequest) -> Result<String, AppError>
where
    C: CompletionClient,
    R: TemplateRenderer,
{
    let prompt = preview(ctx, request)?;
    info!(
        grade = %request.grade,
        references = resolve_references(&request.grade).len(),
        "Compiled progression prompt"
    );
    debug!(prompt_len = prompt.len(), "Prompt ready");

    let settings = ctx.completion();
    let completion_request = CompletionRequest {
        system: SYSTEM_DIRECTIVE.to_string(),
        prompt: prompt.into_string(),
        model: settings.model.clone(),
        max_tokens: settings.max_tokens,
    };

    info!(model = %settings.model, max_tokens = settings.max_tokens, "Requesting completion");
    let response = ctx.client().complete(completion_request)?;
    debug!(
        segments = response.segments.len(),
        stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
        "Completion received"
    );

    response.first_text().map(ToOwned::to_owned).ok_or_else(|| {
        AppError::completion_error("Completion response contained no text content", None)
    })
}

/// Top-level action handler: check input, run the completion, present the outcome.
///
/// Never propagates a completion failure; it is shown on the surface and logged.
pub fn handle<C, R, S>(
    ctx: &AppContext<C, R>,
    request: &ProgressionRequest,
    surface: &mut S,
) -> Result<GenerateOutcome, AppError>
where
    C: CompletionClient,
    R: TemplateRenderer,
    S: ProgressionSurface + ?Sized,
{
    request.validate()?;
    if let Err(err) = request.ensure_current_section() {
        surface.show_warning(&err.to_string());
        return Ok(GenerateOutcome::Incomplete);
    }

    surface.begin_progress(PROGRESS_MESSAGE);
    let result = execute(ctx, request);
    surface.end_progress();

    match result {
        Ok(text) => {
            surface.show_result(&text);
            Ok(GenerateOutcome::Generated { text })
        }
        Err(err) if err.is_completion_failure() => {
            let message = err.to_string();
            surface.show_error(&format!("An error occurred: {}", message));
            error!("Error generating vertical progression analysis: {}", message);
            Ok(GenerateOutcome::Failed { message })
        }
        Err(err) => Err(err),
    }
}
