//! Transform Implementations
//!
//! Concrete collaborators for the transform ports.

mod builtin;
mod command;

use std::sync::Arc;

use crate::config::TransformsConfig;
use crate::domain::ports::{MarkupMinifier, MarkupOptimizer, StyleMinifier};

pub use builtin::{BasicCssMinifier, BasicSvgOptimizer, WhitespaceMinifier};
pub use command::{CommandTransform, COLLAPSE_WHITESPACE_ENV};

/// The three collaborators used by a generate run
#[derive(Clone)]
pub struct Transforms {
    pub optimizer: Arc<dyn MarkupOptimizer>,
    pub style_minifier: Arc<dyn StyleMinifier>,
    pub markup_minifier: Arc<dyn MarkupMinifier>,
}

impl Transforms {
    /// Built-in implementations only
    pub fn builtin() -> Self {
        Self {
            optimizer: Arc::new(BasicSvgOptimizer),
            style_minifier: Arc::new(BasicCssMinifier),
            markup_minifier: Arc::new(WhitespaceMinifier),
        }
    }

    /// Configured commands, falling back to the built-ins
    pub fn from_config(config: &TransformsConfig) -> Self {
        let builtin = Self::builtin();
        let command = |argv: &Option<Vec<String>>| {
            argv.as_deref()
                .and_then(CommandTransform::from_argv)
                .map(Arc::new)
        };

        Self {
            optimizer: command(&config.optimizer)
                .map(|c| c as Arc<dyn MarkupOptimizer>)
                .unwrap_or(builtin.optimizer),
            style_minifier: command(&config.style_minifier)
                .map(|c| c as Arc<dyn StyleMinifier>)
                .unwrap_or(builtin.style_minifier),
            markup_minifier: command(&config.markup_minifier)
                .map(|c| c as Arc<dyn MarkupMinifier>)
                .unwrap_or(builtin.markup_minifier),
        }
    }
}

impl Default for Transforms {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for Transforms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transforms").finish_non_exhaustive()
    }
}
