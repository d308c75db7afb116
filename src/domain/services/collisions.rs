//! Name collision detection
//!
//! Case folding and separator normalization can map two distinct file names
//! to the same identifier or tag name (`Home.svg`, `home.svg`, `home_.svg`).
//! Writing both would silently overwrite one artifact with the other, so
//! every asset claims its names in its output scope before anything is
//! generated.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::DerivedNames;
use crate::error::{IconError, IconResult};

/// Tracks derived names per output scope
#[derive(Debug, Default)]
pub struct CollisionDetector {
    claimed: HashMap<(String, String), PathBuf>,
}

impl CollisionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the identifier and tag name of `source` within `scope`
    ///
    /// Fails with [`IconError::NameCollision`] when either name was already
    /// claimed in the same scope by another file. Nothing is recorded on
    /// failure.
    pub fn claim(&mut self, scope: &str, names: &DerivedNames, source: &Path) -> IconResult<()> {
        for name in [&names.identifier, &names.tag_name] {
            if let Some(first) = self.claimed.get(&(scope.to_string(), name.clone())) {
                if first != source {
                    return Err(IconError::NameCollision {
                        scope: scope.to_string(),
                        name: name.clone(),
                        first: first.clone(),
                        second: source.to_path_buf(),
                    });
                }
            }
        }

        for name in [&names.identifier, &names.tag_name] {
            self.claimed
                .insert((scope.to_string(), name.clone()), source.to_path_buf());
        }
        Ok(())
    }

    /// Number of claimed names across all scopes
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
