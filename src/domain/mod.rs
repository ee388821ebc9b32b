pub mod configuration;
pub mod error;
pub mod grade;
pub mod prompt;
pub mod references;
pub mod request;
pub mod section;

pub use configuration::{
    ANTHROPIC_VERSION, API_KEY_ENV, AppConfig, CompletionConfig, SYSTEM_DIRECTIVE,
};
pub use error::AppError;
pub use grade::{GradeBand, GradeLevel};
pub use prompt::{Prompt, PromptAssemblyError, PromptContext, TemplateRenderer, compile_prompt};
pub use references::{ReferenceDocumentSet, resolve_references};
pub use request::ProgressionRequest;
pub use section::{JoinedSections, MAX_ANCESTOR_SECTIONS, SectionDescriptor, join_non_empty};
