//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and output staging
//! - `transforms/` - Built-in and command-backed collaborators
//! - `events/` - Event sinks (JSON)

pub mod events;
pub mod fs;
pub mod transforms;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::{LocalFs, StagingDir};
pub use transforms::{CommandTransform, Transforms};
