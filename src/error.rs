//! Error types for icon-elements
//!
//! Library code returns [`IconResult`]; only the binary converts into `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::TransformError;

/// Result type alias for icon-elements operations
pub type IconResult<T> = Result<T, IconError>;

/// Which collaborator a [`IconError::Transform`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStage {
    MarkupOptimizer,
    StyleMinifier,
    MarkupMinifier,
}

impl std::fmt::Display for TransformStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TransformStage::MarkupOptimizer => "markup optimizer",
            TransformStage::StyleMinifier => "stylesheet minifier",
            TransformStage::MarkupMinifier => "markup minifier",
        };
        f.write_str(name)
    }
}

/// Main error type for icon-elements operations
#[derive(Error, Debug)]
pub enum IconError {
    /// Group input directory does not exist
    #[error("source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// File name yields no usable words
    #[error("cannot derive names from asset file name '{file_name}'")]
    InvalidAssetName { file_name: String },

    /// Two assets derive the same identifier or tag name in one output scope
    #[error("name collision in {scope}: '{name}' is derived from both {first} and {second}")]
    NameCollision {
        scope: String,
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A collaborator rejected an asset
    #[error("{stage} failed on {path}: {source}")]
    Transform {
        stage: TransformStage,
        path: PathBuf,
        #[source]
        source: TransformError,
    },

    /// Template fragments and values do not interleave
    #[error("template expects {expected} values but got {actual}")]
    TemplateArity { expected: usize, actual: usize },

    /// Configuration could not be parsed or failed validation
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Replacing the output root would delete the icon sources
    #[error("output {output} contains the source directory {source_dir}")]
    OutputContainsSource { output: PathBuf, source_dir: PathBuf },

    /// IO error on a known path
    #[error("IO error on {path}: {source}")]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IconError {
    /// Attach a path to an IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Path {
            path: path.into(),
            source,
        }
    }
}
