//! Prompt compilation for vertical progression requests.

mod compiler;
mod context;
mod error;
mod template;

pub use compiler::{
    PROGRESSION_TEMPLATE, PROGRESSION_TEMPLATE_NAME, Prompt, compile_prompt, progression_context,
};
pub use context::PromptContext;
pub use error::PromptAssemblyError;
pub use template::TemplateRenderer;
