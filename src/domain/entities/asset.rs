//! Asset entities - icon groups and the SVG files inside them
//!
//! Groups are resolved once at discovery time from a [`GroupKind`]; source
//! assets are read once per run and never mutated.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::GroupKind;

/// A named input subdirectory of the icon set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetGroup {
    kind: GroupKind,
    /// Absolute (or cwd-relative) input directory
    input_dir: PathBuf,
    /// Output subdirectory relative to the output root (empty when consolidated)
    output_subdir: PathBuf,
}

impl AssetGroup {
    /// Create a group rooted at `source_root`
    pub fn new(kind: GroupKind, source_root: &Path, output_subdir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            input_dir: source_root.join(kind.path()),
            output_subdir: output_subdir.into(),
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_subdir(&self) -> &Path {
        &self.output_subdir
    }

    /// Group identity (its relative input path)
    pub fn path(&self) -> &'static str {
        self.kind.path()
    }

    pub fn token(&self) -> &'static str {
        self.kind.token()
    }

    pub fn size(&self) -> &'static str {
        self.kind.size()
    }
}

/// One SVG file within a group, with its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    group: GroupKind,
    file_name: String,
    path: PathBuf,
    content: String,
}

impl SourceAsset {
    pub fn new(
        group: GroupKind,
        file_name: impl Into<String>,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            group,
            file_name: file_name.into(),
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn group(&self) -> GroupKind {
        self.group
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Path the content was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
