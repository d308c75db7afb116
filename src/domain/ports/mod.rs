//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod generate_events;
pub mod transform;

pub use file_system::{DirEntry, FileSystem};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink, Phase};
pub use transform::{
    MarkupMinifier, MarkupOptimizer, MinifyOptions, StyleMinifier, TransformError,
};
