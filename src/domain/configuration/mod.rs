pub mod app_config;
pub mod parse;

pub use app_config::{
    ANTHROPIC_VERSION, API_KEY_ENV, AppConfig, CompletionConfig, SYSTEM_DIRECTIVE,
};
pub use parse::parse_config_content;
