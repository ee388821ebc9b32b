use std::fmt;

use super::{PromptAssemblyError, PromptContext, TemplateRenderer};
use crate::domain::{JoinedSections, ProgressionRequest, resolve_references};

/// Name reported in template errors.
pub const PROGRESSION_TEMPLATE_NAME: &str = "progression_prompt.j2";

/// The instructional template sent to the completion service.
///
/// `{SUMMARY1}`, `{SUMMARY2}`, `{MISCON}`, `{SUPPORT}` and `{Step1}` are literal
/// markers for the model to fill in, not template variables.
pub const PROGRESSION_TEMPLATE: &str = include_str!("../../assets/progression_prompt.j2");

/// A fully rendered prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the template variables for a request.
pub fn progression_context(request: &ProgressionRequest) -> PromptContext {
    let parents = JoinedSections::from_sections(&request.parents);
    let grandparents = JoinedSections::from_sections(&request.grandparents);
    let references = resolve_references(&request.grade);

    PromptContext::new()
        .with_var("grade", request.grade.as_str())
        .with_var("current_id", request.current.id.as_str())
        .with_var("current_overview", request.current.overview.as_str())
        .with_var("parent_ids", parents.ids)
        .with_var("parent_overviews", parents.overviews)
        .with_var("grandparent_ids", grandparents.ids)
        .with_var("grandparent_overviews", grandparents.overviews)
        .with_var("reference_files", references.to_lines())
}

/// Render the progression prompt for a request.
///
/// Deterministic: identical requests produce byte-identical prompts.
pub fn compile_prompt<R>(
    request: &ProgressionRequest,
    renderer: &R,
) -> Result<Prompt, PromptAssemblyError>
where
    R: TemplateRenderer + ?Sized,
{
    let context = progression_context(request);
    renderer.render(PROGRESSION_TEMPLATE, &context, PROGRESSION_TEMPLATE_NAME).map(Prompt)
}
