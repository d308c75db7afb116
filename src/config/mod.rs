//! Configuration module for icon-elements
//!
//! Configuration hierarchy:
//! 1. Environment variables (ICON_ELEMENTS_*)
//! 2. `--config <path>`, or `icon-elements.toml` in the working directory
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

// Re-export ConfigWarning from domain layer
pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{resolve, LoadedConfig, OUTPUT_ENV, SOURCE_ENV};
pub use types::{Config, OutputLayout, TransformsConfig, CONFIG_FILE_NAME};
