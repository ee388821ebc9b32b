//! Shared testing harness for `vprog` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const SCENARIO_OVERVIEW: &str = "students multiply within 100";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `vprog` binary.
    ///
    /// The credential is removed so tests opt in explicitly.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vprog").expect("Failed to locate vprog binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("ANTHROPIC_API_KEY")
            .env("RUST_LOG", "error");
        cmd
    }

    /// Like `cli`, with a fake credential set.
    pub(crate) fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("ANTHROPIC_API_KEY", "test-key");
        cmd
    }

    /// Write `vprog.toml` pointing the completion client at `api_url`.
    pub(crate) fn write_config(&self, api_url: &str) {
        let content = format!(
            "[completion]\napi_url = \"{}\"\ntimeout_secs = 5\n",
            api_url
        );
        fs::write(self.work_dir.join("vprog.toml"), content).expect("Failed to write vprog.toml");
    }

    /// Write a file relative to the working directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Arguments for the Grade 3 end-to-end scenario.
    pub(crate) fn scenario_args() -> Vec<&'static str> {
        vec![
            "generate",
            "--grade",
            "Grade 3",
            "--current-id",
            "3.OA.1",
            "--current-overview",
            SCENARIO_OVERVIEW,
            "--parent-id",
            "2.OA.1",
            "--parent-overview",
            "repeated addition",
        ]
    }
}
