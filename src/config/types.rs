//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{GroupKind, NamingRules};
use crate::error::{IconError, IconResult};

use super::loader;
use super::ConfigWarning;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "icon-elements.toml";

/// Where generated files land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLayout {
    /// Every artifact directly under the output root
    #[default]
    Consolidated,
    /// `<output>/<group path>/` per group
    PerGroup,
}

/// Collaborator configuration
///
/// Each command is an argv list; when absent the built-in implementation is
/// used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformsConfig {
    /// Passed to the markup minifier
    #[serde(default = "default_true")]
    pub collapse_whitespace: bool,

    /// External vector markup optimizer (e.g. `["svgo", "-i", "-", "-o", "-"]`)
    #[serde(default)]
    pub optimizer: Option<Vec<String>>,

    /// External stylesheet minifier
    #[serde(default)]
    pub style_minifier: Option<Vec<String>>,

    /// External markup minifier
    #[serde(default)]
    pub markup_minifier: Option<Vec<String>>,
}

impl Default for TransformsConfig {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            optimizer: None,
            style_minifier: None,
            markup_minifier: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the icon set; groups live below it
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Output root, replaced on every successful run
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub layout: OutputLayout,

    /// Groups to generate, in order
    #[serde(default = "default_groups")]
    pub groups: Vec<GroupKind>,

    #[serde(default)]
    pub naming: NamingRules,

    #[serde(default)]
    pub transforms: TransformsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            layout: OutputLayout::default(),
            groups: default_groups(),
            naming: NamingRules::default(),
            transforms: TransformsConfig::default(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from("node_modules/heroicons")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_groups() -> Vec<GroupKind> {
    GroupKind::ALL.to_vec()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> IconResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> IconResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve relative source/output paths against `base`
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.source.is_relative() {
            self.source = base.join(&self.source);
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        self
    }

    /// Reject configurations that cannot produce valid artifacts
    pub fn validate(&self, file: &Path) -> IconResult<()> {
        let invalid = |message: String| IconError::InvalidConfig {
            file: file.to_path_buf(),
            message,
        };

        let prefix = &self.naming.tag_prefix;
        if !prefix.starts_with(|c: char| c.is_ascii_lowercase()) {
            return Err(invalid(format!(
                "naming.tag_prefix '{}' must start with a lowercase ASCII letter",
                prefix
            )));
        }
        if !prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(invalid(format!(
                "naming.tag_prefix '{}' may only contain a-z, 0-9 and '-'",
                prefix
            )));
        }

        if self.naming.extension.is_empty() || self.naming.extension.starts_with('.') {
            return Err(invalid(
                "naming.extension must be non-empty and given without the dot".to_string(),
            ));
        }

        if self.groups.is_empty() {
            return Err(invalid("at least one group must be configured".to_string()));
        }

        let mut seen = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            if seen.contains(group) {
                return Err(invalid(format!("group '{}' is listed twice", group.token())));
            }
            seen.push(*group);
        }

        for (key, argv) in [
            ("transforms.optimizer", &self.transforms.optimizer),
            ("transforms.style_minifier", &self.transforms.style_minifier),
            ("transforms.markup_minifier", &self.transforms.markup_minifier),
        ] {
            if argv.as_ref().is_some_and(|argv| argv.is_empty()) {
                return Err(invalid(format!("{} must name a program", key)));
            }
        }

        Ok(())
    }
}
