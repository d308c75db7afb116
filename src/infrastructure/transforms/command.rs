//! Command Transform
//!
//! Pipes text through an external program: the input goes to stdin and
//! stdout is taken as the result. This is how real optimizers and minifiers
//! (svgo, lightningcss, html-minifier) are plugged in.
//!
//! As a markup minifier the command cannot take [`MinifyOptions`] as
//! arguments; it sees them as `ICON_ELEMENTS_COLLAPSE_WHITESPACE=1` or `=0`
//! in its environment.

use async_trait::async_trait;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tokio::io::AsyncWriteExt;

use crate::domain::ports::{
    MarkupMinifier, MarkupOptimizer, MinifyOptions, StyleMinifier, TransformError,
};

/// Environment variable carrying `MinifyOptions::collapse_whitespace`
pub const COLLAPSE_WHITESPACE_ENV: &str = "ICON_ELEMENTS_COLLAPSE_WHITESPACE";

/// External program used as a collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTransform {
    program: String,
    args: Vec<String>,
}

impl CommandTransform {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from an argv list; `None` when it is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the command, blocking the current thread
    ///
    /// Generate runs call this from the blocking pool.
    pub fn run_blocking(&self, input: &str) -> Result<String, TransformError> {
        tracing::debug!(program = %self.program, args = ?self.args, "running transform command");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| self.spawn_error(source))?;

        // feed stdin from another thread so a chatty child cannot deadlock us
        let stdin = child.stdin.take();
        let bytes = input.as_bytes().to_vec();
        let writer = std::thread::spawn(move || match stdin {
            Some(mut stdin) => stdin.write_all(&bytes),
            None => Ok(()),
        });

        let output = child
            .wait_with_output()
            .map_err(|source| self.spawn_error(source))?;
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));

        self.finish(output, written)
    }

    /// Run the command on the tokio runtime
    pub async fn run(&self, input: &str) -> Result<String, TransformError> {
        self.run_with_env(input, &[]).await
    }

    async fn run_with_env(
        &self,
        input: &str,
        envs: &[(&str, &str)],
    ) -> Result<String, TransformError> {
        tracing::debug!(program = %self.program, args = ?self.args, "running transform command");

        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .envs(envs.iter().copied())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| self.spawn_error(source))?;

        let stdin = child.stdin.take();
        let (written, output) = tokio::join!(feed(stdin, input), child.wait_with_output());
        let output = output.map_err(|source| self.spawn_error(source))?;

        self.finish(output, written)
    }

    fn finish(
        &self,
        output: Output,
        written: std::io::Result<()>,
    ) -> Result<String, TransformError> {
        if !output.status.success() {
            return Err(TransformError::Command {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // a successful child may legitimately stop reading early
        if let Err(e) = written {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(self.spawn_error(e));
            }
        }

        String::from_utf8(output.stdout).map_err(|_| TransformError::InvalidOutput {
            program: self.program.clone(),
        })
    }

    fn spawn_error(&self, source: std::io::Error) -> TransformError {
        TransformError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

async fn feed(stdin: Option<tokio::process::ChildStdin>, input: &str) -> std::io::Result<()> {
    let Some(mut stdin) = stdin else {
        return Ok(());
    };
    stdin.write_all(input.as_bytes()).await?;
    stdin.shutdown().await
}

impl MarkupOptimizer for CommandTransform {
    fn optimize(&self, markup: &str) -> Result<String, TransformError> {
        self.run_blocking(markup)
    }
}

impl StyleMinifier for CommandTransform {
    fn minify(&self, stylesheet: &str) -> Result<String, TransformError> {
        self.run_blocking(stylesheet)
    }
}

#[async_trait]
impl MarkupMinifier for CommandTransform {
    async fn minify(&self, markup: &str, options: MinifyOptions) -> Result<String, TransformError> {
        let collapse = if options.collapse_whitespace { "1" } else { "0" };
        self.run_with_env(markup, &[(COLLAPSE_WHITESPACE_ENV, collapse)])
            .await
    }
}
