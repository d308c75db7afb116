//! Event Sink Implementations
//!
//! Provides concrete implementations of GenerateEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - PhaseReporter (in `ui`): Human-readable phase lines

mod json;

pub use json::JsonEventSink;
