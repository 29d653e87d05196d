//! User-facing output.
//!
//! Every operation receives a `&mut dyn UserInterface` instead of writing to
//! the terminal directly, so the same code drives the real terminal and the
//! [`MockUI`] used in tests.
//!
//! # Example
//!
//! ```
//! use beesetup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Detected OS: Linux");
//! ui.success("Git already installed: version 2.43.0");
//! assert_eq!(ui.successes().len(), 1);
//! ```

pub mod mock;
pub mod output;
pub mod summary;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use summary::summary_lines;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SetupTheme};

use crate::requirements::status::RunSummary;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a routine progress message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a remediation hint.
    fn show_hint(&mut self, hint: &str);

    /// Echo a command that is about to run.
    fn show_command(&mut self, command: &str);

    /// Render the end-of-run summary.
    fn show_summary(&mut self, summary: &RunSummary);
}
