//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use super::{OutputMode, UserInterface};
use crate::requirements::status::RunSummary;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    commands: Vec<String>,
    summaries: Vec<RunSummary>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all echoed commands.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all rendered summaries.
    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }

    /// Check whether any message, success, warning or error contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .chain(&self.hints)
            .any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        self.summaries.push(summary.clone());
    }
}
