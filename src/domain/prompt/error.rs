/// Error during prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAssemblyError {
    /// A template references a variable the context does not provide.
    MissingVariable { template: String, name: String },

    /// Failed to render a template with the provided context.
    TemplateRenderError { template: String, reason: String },
}

impl std::fmt::Display for PromptAssemblyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVariable { template, name } => {
                write!(f, "Template {} requires variable '{}' which was not provided", template, name)
            }
            Self::TemplateRenderError { template, reason } => {
                write!(f, "Failed to render template {}: {}", template, reason)
            }
        }
    }
}

impl std::error::Error for PromptAssemblyError {}
