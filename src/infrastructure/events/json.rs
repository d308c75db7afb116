//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let json = match event {
            GenerateEvent::Started {
                source,
                output,
                group_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "generate",
                    "source": source.display().to_string(),
                    "output": output.display().to_string(),
                    "group_count": group_count,
                })
            }

            GenerateEvent::PhaseStarted { phase } => {
                serde_json::json!({
                    "event": "phase_start",
                    "phase": phase.id(),
                    "label": phase.label(),
                })
            }

            GenerateEvent::PhaseCompleted { phase } => {
                serde_json::json!({
                    "event": "phase_complete",
                    "phase": phase.id(),
                })
            }

            GenerateEvent::PhaseFailed { phase, error } => {
                serde_json::json!({
                    "event": "phase_error",
                    "phase": phase.id(),
                    "error": error,
                })
            }

            GenerateEvent::EntrySkipped { path, reason } => {
                serde_json::json!({
                    "event": "item_skipped",
                    "path": path.display().to_string(),
                    "reason": reason,
                })
            }

            GenerateEvent::ArtifactWritten {
                index,
                tag_name,
                module,
                declaration,
            } => {
                serde_json::json!({
                    "event": "item_written",
                    "index": index,
                    "tag": tag_name,
                    "module": module.display().to_string(),
                    "declaration": declaration.display().to_string(),
                })
            }

            GenerateEvent::Completed {
                artifact_count,
                skipped_count,
                file_count,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "generate",
                    "status": "success",
                    "artifacts": artifact_count,
                    "skipped": skipped_count,
                    "files": file_count,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
