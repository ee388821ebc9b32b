//! Filesystem loading for `vprog.toml` and request files.

use std::fs;
use std::path::Path;

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppConfig, AppError, ProgressionRequest};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "vprog.toml";

/// Load application configuration.
///
/// An explicit path must exist. Without one, `vprog.toml` in `dir` is used if
/// present, otherwise built-in defaults apply.
pub fn load_app_config(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigFileNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Load a progression request from a TOML file.
pub fn load_request_file(path: &Path) -> Result<ProgressionRequest, AppError> {
    if !path.is_file() {
        return Err(AppError::RequestFileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let request: ProgressionRequest = toml::from_str(&content)?;
    request.validate()?;
    Ok(request)
}
