//! Terminal presentation for the CLI
//!
//! Everything here writes to stderr; stdout is reserved for `--json` events.

pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
