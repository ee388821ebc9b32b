//! CLI Adapter.

mod form;
mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::{api, logging};
use crate::domain::{AppError, GradeLevel};

#[derive(Parser)]
#[command(name = "vprog")]
#[command(version)]
#[command(
    about = "Generate vertical learning progression notes for a math curriculum section",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./vprog.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a vertical progression analysis for a section
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// List the supported grade levels
    Grades,
    /// List the progression documents referenced for a grade level
    #[clap(visible_alias = "refs")]
    References {
        /// Grade level label, e.g. "Grade 3"
        grade: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    dotenv::dotenv().ok();
    logging::init_tracing();

    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args, cli.config.as_deref()),
        Commands::Grades => run_grades().map(|_| 0),
        Commands::References { grade } => run_references(&grade).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_grades() -> Result<(), AppError> {
    for grade in api::list_grades() {
        println!("{:<14} {} ({} reference documents)", grade.label, grade.band, grade.reference_count);
    }
    Ok(())
}

fn run_references(grade: &str) -> Result<(), AppError> {
    if let Err(err) = grade.parse::<GradeLevel>() {
        eprintln!("⚠️  {}; no reference documents", err);
        return Ok(());
    }
    for document in api::references(grade).documents() {
        println!("{}", document);
    }
    Ok(())
}
