//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod fingerprint;
mod group;
pub mod names;

pub use config_warning::ConfigWarning;
pub use fingerprint::Fingerprint;
pub use group::GroupKind;
pub use names::{derive_names, DerivedNames, NamingRules};
