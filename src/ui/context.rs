use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// How the CLI talks to the user for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
    /// Rewrite the in-progress phase line in place
    pub animation: bool,
}

impl UiContext {
    pub fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self::from_caps(json, quiet, verbose, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        quiet: bool,
        verbose: u8,
        caps: TerminalCapabilities,
    ) -> Self {
        let quiet = quiet || json;
        Self {
            json,
            quiet,
            verbose,
            color: caps.supports_color && !json,
            unicode: caps.supports_unicode,
            animation: !quiet && caps.is_tty && !caps.is_ci,
        }
    }
}
