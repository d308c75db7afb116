//! Test environment for isolated icon-elements runs.
//!
//! Provides `TestEnv` - a temp project directory used as the working
//! directory of the binary, plus helpers to lay out icon sets in it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_icon-elements")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("ICON_ELEMENTS_SOURCE")
            .env_remove("ICON_ELEMENTS_OUTPUT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute icon-elements");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Add an icon under the default source root
    pub fn add_icon(&self, group_path: &str, file_name: &str, content: &str) {
        self.write_project_file(
            &format!("node_modules/heroicons/{}/{}", group_path, file_name),
            content,
        );
    }

    /// Create the input directories of every default group
    pub fn create_default_groups(&self) {
        for group in ["24/solid", "24/outline", "20/solid", "16/solid"] {
            std::fs::create_dir_all(self.project_path(&format!("node_modules/heroicons/{}", group)))
                .expect("Failed to create group directory");
        }
    }

    /// Read a generated file relative to the project root
    pub fn read_output(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read generated file {}: {}", relative_path, e))
    }

    /// Files under a project directory, relative to it, sorted
    pub fn files_in(&self, relative_dir: &str) -> Vec<String> {
        let root = self.project_path(relative_dir);
        let mut files: Vec<String> = super::list_all_files(&root)
            .into_iter()
            .map(|f| {
                Path::new(&f)
                    .strip_prefix(&root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        files.sort();
        files
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
