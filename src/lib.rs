//! icon-elements - generates one self-registering custom element per SVG icon
//!
//! Every icon of every configured group becomes a JavaScript module that
//! defines and registers an `HTMLElement` subclass rendering the icon into its
//! shadow root, plus a TypeScript declaration for it. Runs are staged next to
//! the output root and committed only when every icon succeeded.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::Config;
pub use domain::value_objects::{derive_names, DerivedNames, GroupKind, NamingRules};
pub use error::{IconError, IconResult};
