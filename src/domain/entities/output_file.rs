//! OutputFile entity - a generated output file
//!
//! OutputFiles are what a rendered artifact turns into once it has paths.
//! They represent what will be written to the staging directory.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// A generated output file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the output root
    path: PathBuf,
    /// Generated content, always newline-terminated
    content: String,
}

impl OutputFile {
    /// Create a new OutputFile
    ///
    /// A single trailing newline is appended when missing.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let mut content = content.into();
        if !content.ends_with('\n') {
            content.push('\n');
        }
        Self {
            path: path.into(),
            content,
        }
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// SHA256 of the content, `sha256:` prefixed
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        format!("sha256:{:x}", hasher.finalize())
    }

    /// Get content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
