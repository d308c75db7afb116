//! Transform ports - the collaborators that rewrite asset text
//!
//! The generator does not optimize vectors or minify styles itself; it hands
//! text to these traits and embeds whatever comes back. Built-in and
//! command-backed implementations live in `infrastructure::transforms`.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a collaborator
#[derive(Debug, Error)]
pub enum TransformError {
    /// The collaborator rejected its input
    #[error("{0}")]
    Failed(String),

    /// An external command could not be started or fed
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command exited unsuccessfully
    #[error("`{program}` exited with {status}: {stderr}")]
    Command {
        program: String,
        status: String,
        stderr: String,
    },

    /// An external command wrote something that is not UTF-8
    #[error("`{program}` produced non UTF-8 output")]
    InvalidOutput { program: String },
}

/// Options passed to the markup minifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinifyOptions {
    /// Collapse whitespace runs and drop whitespace between tags
    pub collapse_whitespace: bool,
}

/// Optimizes raw vector markup
pub trait MarkupOptimizer: Send + Sync {
    fn optimize(&self, markup: &str) -> Result<String, TransformError>;
}

/// Minifies a stylesheet
pub trait StyleMinifier: Send + Sync {
    fn minify(&self, stylesheet: &str) -> Result<String, TransformError>;
}

/// Minifies the combined style + markup content
///
/// Asynchronous because implementations may delegate to another process.
#[async_trait]
pub trait MarkupMinifier: Send + Sync {
    async fn minify(&self, markup: &str, options: MinifyOptions) -> Result<String, TransformError>;
}
