//! RenderedArtifact entity - the module/declaration pair for one asset

use std::path::Path;

use super::OutputFile;
use crate::domain::value_objects::DerivedNames;

/// Extension of the generated module
pub const MODULE_EXTENSION: &str = "js";
/// Extension of the generated declaration
pub const DECLARATION_EXTENSION: &str = "d.ts";

/// Generated sources for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    names: DerivedNames,
    module_source: String,
    declaration_source: String,
}

impl RenderedArtifact {
    pub fn new(
        names: DerivedNames,
        module_source: impl Into<String>,
        declaration_source: impl Into<String>,
    ) -> Self {
        Self {
            names,
            module_source: module_source.into(),
            declaration_source: declaration_source.into(),
        }
    }

    pub fn names(&self) -> &DerivedNames {
        &self.names
    }

    pub fn module_source(&self) -> &str {
        &self.module_source
    }

    pub fn declaration_source(&self) -> &str {
        &self.declaration_source
    }

    /// Turn the pair into output files under `dir`, named after the tag
    pub fn into_output_files(self, dir: &Path) -> [OutputFile; 2] {
        let tag = &self.names.tag_name;
        [
            OutputFile::new(
                dir.join(format!("{}.{}", tag, MODULE_EXTENSION)),
                self.module_source,
            ),
            OutputFile::new(
                dir.join(format!("{}.{}", tag, DECLARATION_EXTENSION)),
                self.declaration_source,
            ),
        ]
    }
}
