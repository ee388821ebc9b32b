use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::{PromptAssemblyError, PromptContext, TemplateRenderer};

/// Template renderer using Minijinja.
///
/// Undefined variables are errors, values are inserted verbatim (no HTML
/// escaping), and template whitespace is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, PromptAssemblyError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(template, &context.variables)
            .map_err(|err| template_render_error(template_name, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn template_render_error(template_name: &str, err: minijinja::Error) -> PromptAssemblyError {
    if err.kind() == minijinja::ErrorKind::UndefinedError {
        return PromptAssemblyError::MissingVariable {
            template: template_name.to_string(),
            name: err.detail().unwrap_or("unknown").to_string(),
        };
    }
    PromptAssemblyError::TemplateRenderError {
        template: template_name.to_string(),
        reason: err.to_string(),
    }
}
