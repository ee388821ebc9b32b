pub mod completion_client_http;
pub mod config_files;
pub mod template;
pub mod terminal_surface;

pub use completion_client_http::HttpCompletionClient;
pub use config_files::{DEFAULT_CONFIG_FILE, load_app_config, load_request_file};
pub use template::MinijinjaTemplateRenderer;
pub use terminal_surface::TerminalSurface;
