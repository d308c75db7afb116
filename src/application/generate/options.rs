//! Generate Options
//!
//! Configuration types for generate runs.

use std::path::PathBuf;

use crate::config::{Config, OutputLayout};
use crate::domain::ports::MinifyOptions;
use crate::domain::value_objects::{GroupKind, NamingRules};

/// Options for the generate use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Icon set root; each group is a subdirectory
    pub source: PathBuf,
    /// Output root, replaced on success
    pub output: PathBuf,
    pub layout: OutputLayout,
    /// Groups to generate, in order
    pub groups: Vec<GroupKind>,
    pub naming: NamingRules,
    /// Passed to the markup minifier
    pub minify: MinifyOptions,
}

impl GenerateOptions {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            layout: OutputLayout::default(),
            groups: GroupKind::ALL.to_vec(),
            naming: NamingRules::default(),
            minify: MinifyOptions {
                collapse_whitespace: true,
            },
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            source: config.source.clone(),
            output: config.output.clone(),
            layout: config.layout,
            groups: config.groups.clone(),
            naming: config.naming.clone(),
            minify: MinifyOptions {
                collapse_whitespace: config.transforms.collapse_whitespace,
            },
        }
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_groups(mut self, groups: impl Into<Vec<GroupKind>>) -> Self {
        self.groups = groups.into();
        self
    }

    pub fn with_naming(mut self, naming: NamingRules) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_minify(mut self, minify: MinifyOptions) -> Self {
        self.minify = minify;
        self
    }

    /// Output subdirectory of a group under the chosen layout
    pub fn output_subdir(&self, group: GroupKind) -> PathBuf {
        match self.layout {
            OutputLayout::Consolidated => PathBuf::new(),
            OutputLayout::PerGroup => PathBuf::from(group.path()),
        }
    }

    /// Name of the scope in which derived names must be unique
    pub fn collision_scope(&self, group: GroupKind) -> String {
        match self.layout {
            OutputLayout::Consolidated => self.output.display().to_string(),
            OutputLayout::PerGroup => format!("group {}", group.path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_copies_run_settings() {
        let mut config = Config::default();
        config.layout = OutputLayout::PerGroup;
        config.groups = vec![GroupKind::Micro];
        config.transforms.collapse_whitespace = false;

        let options = GenerateOptions::from_config(&config);

        assert_eq!(options.source, config.source);
        assert_eq!(options.groups, vec![GroupKind::Micro]);
        assert!(!options.minify.collapse_whitespace);
    }

    #[test]
    fn output_subdir_follows_layout() {
        let options = GenerateOptions::new("icons", "dist");
        assert_eq!(options.output_subdir(GroupKind::Mini), PathBuf::new());

        let options = options.with_layout(OutputLayout::PerGroup);
        assert_eq!(options.output_subdir(GroupKind::Mini), PathBuf::from("20/solid"));
    }

    #[test]
    fn collision_scope_follows_layout() {
        let options = GenerateOptions::new("icons", "dist");
        assert_eq!(options.collision_scope(GroupKind::Solid), "dist");
        assert_eq!(options.collision_scope(GroupKind::Outline), "dist");

        let options = options.with_layout(OutputLayout::PerGroup);
        assert_eq!(options.collision_scope(GroupKind::Solid), "group 24/solid");
    }
}
