//! Terminal UI.

use console::Term;
use std::io::Write;

use super::summary::summary_lines;
use super::{should_use_colors, OutputMode, SetupTheme, UserInterface};
use crate::requirements::status::RunSummary;

/// Terminal UI implementation.
///
/// Routine output goes to stdout; warnings and errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: SetupTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            SetupTheme::new()
        } else {
            SetupTheme::plain()
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
        if self.mode.shows_progress() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            writeln!(self.out, "{}", self.theme.format_command(command)).ok();
        }
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        if !self.mode.shows_status() {
            return;
        }
        writeln!(self.out).ok();
        for line in summary_lines(summary, &self.theme) {
            writeln!(self.out, "{}", line).ok();
        }
    }
}

/// Create the UI for the given mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ui_keeps_mode() {
        let ui = create_ui(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn silent_ui_accepts_all_calls() {
        let mut ui = TerminalUI::new(OutputMode::Silent);
        ui.message("hidden");
        ui.success("hidden");
        ui.warning("hidden");
        ui.show_header("hidden");
        ui.show_hint("hidden");
        ui.show_command("hidden");
        ui.show_summary(&RunSummary::new(
            crate::requirements::registry::OsFamily::Linux,
            false,
        ));
    }
}
