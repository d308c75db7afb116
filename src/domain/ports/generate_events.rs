//! Generate Event Port
//!
//! Provides an observable interface for generate runs.
//! Enables the phase reporter, JSON event streams, and debugging.

use std::path::PathBuf;

/// Ordered phases of a generate run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Cleanup,
    Prepare,
    Generate,
}

impl Phase {
    /// All phases in execution order
    pub const ALL: [Phase; 3] = [Phase::Cleanup, Phase::Prepare, Phase::Generate];

    /// Human readable label shown in the status stream
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Cleanup => "Cleaning up previous build",
            Phase::Prepare => "Creating artifacts directories",
            Phase::Generate => "Generating web components",
        }
    }

    /// Stable identifier used in machine readable output
    pub fn id(&self) -> &'static str {
        match self {
            Phase::Cleanup => "cleanup",
            Phase::Prepare => "prepare",
            Phase::Generate => "generate",
        }
    }
}

/// Event emitted during a generate run
#[derive(Debug, Clone)]
pub enum GenerateEvent {
    /// Run started
    Started {
        source: PathBuf,
        output: PathBuf,
        group_count: usize,
    },

    /// A phase started
    PhaseStarted { phase: Phase },

    /// A phase finished successfully
    PhaseCompleted { phase: Phase },

    /// A phase failed; the run stops here
    PhaseFailed { phase: Phase, error: String },

    /// A directory entry was not turned into an artifact
    EntrySkipped { path: PathBuf, reason: String },

    /// Both files of one asset were written to staging
    ArtifactWritten {
        index: usize,
        tag_name: String,
        module: PathBuf,
        declaration: PathBuf,
    },

    /// Run committed
    Completed {
        artifact_count: usize,
        skipped_count: usize,
        file_count: usize,
    },
}

/// Trait for receiving generate events
///
/// Implementations can be:
/// - PhaseReporter: status lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait GenerateEventSink: Send + Sync {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);

    /// Check if this sink wants per-artifact events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
