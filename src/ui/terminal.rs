//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, DeployEnvTheme, OutputMode, UserInterface};

/// Terminal UI writing to stdout, with errors on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: DeployEnvTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DeployEnvTheme::new()
        } else {
            DeployEnvTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_headers() {
            writeln!(self.out, "{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_field(&mut self, key: &str, value: &str) {
        if self.mode.shows_headers() {
            writeln!(self.out, "{}", self.theme.format_field(key, value)).ok();
        } else {
            writeln!(self.out, "{}", value).ok();
        }
    }

    fn data(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
