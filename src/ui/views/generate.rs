use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crossterm::{cursor, terminal, QueueableCommand};
use icon_elements::domain::ports::{GenerateEvent, GenerateEventSink, Phase};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_phase_started(phase: Phase, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}...",
        Icon::Progress.colored(supports_color, supports_unicode),
        phase.label()
    )
}

pub fn render_phase_completed(
    phase: Phase,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        phase.label()
    )
}

pub fn render_phase_failed(
    phase: Phase,
    error: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}\n  {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(phase.label()).render(supports_color),
        Icon::Arrow.colored(supports_color, supports_unicode),
        error
    )
}

pub fn render_skipped(
    path: &Path,
    reason: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} Skipped {} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        path.display(),
        ColoredText::dim(format!("({})", reason)).render(supports_color)
    )
}

pub fn render_artifact_written(
    tag_name: &str,
    module: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "  {} {} {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        tag_name,
        ColoredText::dim(module.display().to_string()).render(supports_color)
    )
}

pub fn render_summary(
    artifact_count: usize,
    file_count: usize,
    skipped_count: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut line = format!(
        "Generated {} web component{} ({} file{})",
        artifact_count,
        plural(artifact_count),
        file_count,
        plural(file_count)
    );
    if skipped_count > 0 {
        line.push_str(&format!(
            ", skipped {} entr{}",
            skipped_count,
            if skipped_count == 1 { "y" } else { "ies" }
        ));
    }

    format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(line).bold().render(supports_color)
    )
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

struct ReporterState {
    out: Box<dyn Write + Send>,
    /// Phase whose progress line is on screen without a newline
    pending: Option<Phase>,
}

/// Status stream for human readers
///
/// Prints one line per phase, skip warnings, and a closing summary. On an
/// interactive terminal the in-progress line is rewritten in place.
pub struct PhaseReporter {
    ui: UiContext,
    state: Mutex<ReporterState>,
}

impl PhaseReporter {
    pub fn stderr(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            state: Mutex::new(ReporterState {
                out: Box::new(writer),
                pending: None,
            }),
        }
    }

    fn render(&self, event: &GenerateEvent) -> Option<String> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            GenerateEvent::Started { .. } => None,
            GenerateEvent::PhaseStarted { phase } => {
                Some(render_phase_started(*phase, color, unicode))
            }
            GenerateEvent::PhaseCompleted { phase } => {
                Some(render_phase_completed(*phase, color, unicode))
            }
            GenerateEvent::PhaseFailed { phase, error } => {
                Some(render_phase_failed(*phase, error, color, unicode))
            }
            GenerateEvent::EntrySkipped { path, reason } => {
                Some(render_skipped(path, reason, color, unicode))
            }
            GenerateEvent::ArtifactWritten {
                tag_name, module, ..
            } => Some(render_artifact_written(tag_name, module, color, unicode)),
            GenerateEvent::Completed {
                artifact_count,
                skipped_count,
                file_count,
                ..
            } => Some(render_summary(
                *artifact_count,
                *file_count,
                *skipped_count,
                color,
                unicode,
            )),
        }
    }

    fn write(&self, event: &GenerateEvent, text: &str) -> io::Result<()> {
        let Ok(mut state) = self.state.lock() else {
            return Ok(());
        };
        let ReporterState { out, pending } = &mut *state;

        if let GenerateEvent::PhaseStarted { phase } = event {
            if self.ui.animation {
                out.write_all(text.as_bytes())?;
                *pending = Some(*phase);
                return out.flush();
            }
            return Ok(());
        }

        if let Some(phase) = pending.take() {
            out.queue(cursor::MoveToColumn(0))?;
            out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            let finished = matches!(
                event,
                GenerateEvent::PhaseCompleted { .. } | GenerateEvent::PhaseFailed { .. }
            );
            out.write_all(text.as_bytes())?;
            if !finished {
                out.write_all(
                    render_phase_started(phase, self.ui.color, self.ui.unicode).as_bytes(),
                )?;
                *pending = Some(phase);
            }
            return out.flush();
        }

        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

impl GenerateEventSink for PhaseReporter {
    fn on_event(&self, event: GenerateEvent) {
        if self.ui.quiet && !matches!(event, GenerateEvent::PhaseFailed { .. }) {
            return;
        }
        if let Some(text) = self.render(&event) {
            let _ = self.write(&event, &text);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.verbose > 0 && !self.ui.quiet
    }
}
