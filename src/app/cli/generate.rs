use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::warn;

use super::form;
use crate::adapters::{TerminalSurface, load_request_file};
use crate::app::api::{self, GenerateOutcome};
use crate::domain::{AppError, ProgressionRequest, SectionDescriptor};

const FIELD_FLAGS: [&str; 7] = [
    "grade",
    "current_id",
    "current_overview",
    "parent_ids",
    "parent_overviews",
    "grandparent_ids",
    "grandparent_overviews",
];

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Grade level (e.g. "Kindergarten", "Grade 3", "Algebra 1")
    #[arg(short, long, required_unless_present_any = ["input", "interactive"])]
    pub grade: Option<String>,
    /// Current section ID
    #[arg(long, value_name = "ID")]
    pub current_id: Option<String>,
    /// Current section overview
    #[arg(long, value_name = "TEXT")]
    pub current_overview: Option<String>,
    /// Parent section ID (repeat up to 3 times)
    #[arg(long = "parent-id", value_name = "ID")]
    pub parent_ids: Vec<String>,
    /// Parent section overview (repeat up to 3 times)
    #[arg(long = "parent-overview", value_name = "TEXT")]
    pub parent_overviews: Vec<String>,
    /// Grandparent section ID (repeat up to 3 times)
    #[arg(long = "grandparent-id", value_name = "ID")]
    pub grandparent_ids: Vec<String>,
    /// Grandparent section overview (repeat up to 3 times)
    #[arg(long = "grandparent-overview", value_name = "TEXT")]
    pub grandparent_overviews: Vec<String>,
    /// Read the request from a TOML file
    #[arg(short, long, value_name = "FILE", conflicts_with_all = FIELD_FLAGS)]
    pub input: Option<PathBuf>,
    /// Fill in the form interactively
    #[arg(short = 'I', long, conflicts_with = "input", conflicts_with_all = FIELD_FLAGS)]
    pub interactive: bool,
    /// Print the compiled prompt without calling the completion service
    #[arg(long)]
    pub prompt_preview: bool,
    /// Also write the raw model output, verbatim, to this file
    #[arg(long, value_name = "FILE", conflicts_with = "prompt_preview")]
    pub raw: Option<PathBuf>,
}

impl GenerateArgs {
    /// Build the request from command-line fields, passing values through unchanged.
    fn request_from_flags(&self) -> ProgressionRequest {
        let current = SectionDescriptor {
            id: self.current_id.clone().unwrap_or_default(),
            overview: self.current_overview.clone().unwrap_or_default(),
        };
        ProgressionRequest::new(self.grade.clone().unwrap_or_default(), current)
            .with_parents(SectionDescriptor::zip_padded(&self.parent_ids, &self.parent_overviews))
            .with_grandparents(SectionDescriptor::zip_padded(
                &self.grandparent_ids,
                &self.grandparent_overviews,
            ))
    }

    fn collect_request(&self) -> Result<Option<ProgressionRequest>, AppError> {
        if let Some(path) = &self.input {
            return load_request_file(path).map(Some);
        }
        if self.interactive {
            return form::prompt_request();
        }
        let request = self.request_from_flags();
        request.validate()?;
        Ok(Some(request))
    }
}

pub fn run_generate(args: GenerateArgs, config_path: Option<&Path>) -> Result<i32, AppError> {
    let config = api::load_config(config_path)?;
    let Some(request) = args.collect_request()? else {
        return Ok(0);
    };

    if args.prompt_preview {
        let prompt = api::preview_prompt(&request)?;
        println!("{}", prompt);
        return Ok(0);
    }

    let mut surface = TerminalSurface::stdio();
    let outcome = api::run_generate(&request, &config.completion, &mut surface)?;

    if let (GenerateOutcome::Generated { text }, Some(path)) = (&outcome, &args.raw) {
        save_raw_text(path, text);
    }

    Ok(outcome.exit_code())
}

/// Write the verbatim model output. The analysis was already shown, so a
/// failed write is reported as a warning and does not change the exit code.
fn save_raw_text(path: &Path, text: &str) -> bool {
    match fs::write(path, text) {
        Ok(()) => {
            eprintln!("📄 Raw text saved to {}", path.display());
            true
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to save raw text");
            eprintln!("⚠️  Could not save raw text to {}: {}", path.display(), err);
            false
        }
    }
}
