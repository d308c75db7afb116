//! Generate Result
//!
//! Result types for generate runs.

use std::path::PathBuf;

use crate::domain::value_objects::{DerivedNames, GroupKind};

/// Result of a committed generate run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResult {
    /// Output root the run committed to
    pub output: PathBuf,
    /// Groups that were processed, in order
    pub groups: Vec<GroupKind>,
    /// Names of every generated artifact, in discovery order
    pub generated: Vec<DerivedNames>,
    /// Entries that were skipped
    pub skipped: Vec<PathBuf>,
    /// Written files, relative to the output root
    pub files: Vec<PathBuf>,
}

impl GenerateResult {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// Number of generated module/declaration pairs
    pub fn artifact_count(&self) -> usize {
        self.generated.len()
    }

    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}
