//! Terminal styling.

use console::Style;

use crate::requirements::status::StepOutcome;

/// Styles used by the terminal UI and the summary table.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Tool present or just installed.
    pub ok: Style,
    /// Tool would be installed (dry run).
    pub pending: Style,
    /// Install or sync failed.
    pub failed: Style,
    /// Non-fatal warnings.
    pub warn: Style,
    /// Borders and secondary text.
    pub muted: Style,
    /// Titles.
    pub emphasis: Style,
    /// Echoed commands.
    pub command: Style,
    /// Remediation hints.
    pub hint: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Colored theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            pending: Style::new().cyan(),
            failed: Style::new().red().bold(),
            warn: Style::new().yellow(),
            muted: Style::new().dim(),
            emphasis: Style::new().bold(),
            command: Style::new().dim().italic(),
            hint: Style::new().yellow().dim(),
        }
    }

    /// Unstyled theme for pipes and `NO_COLOR`.
    pub fn plain() -> Self {
        let none = Style::new();
        Self {
            ok: none.clone(),
            pending: none.clone(),
            failed: none.clone(),
            warn: none.clone(),
            muted: none.clone(),
            emphasis: none.clone(),
            command: none.clone(),
            hint: none,
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.ok.apply_to(format!("✓ {}", msg)).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warn.apply_to(format!("⚠ {}", msg)).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.failed.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// `  $ <command>`, as echoed in verbose mode.
    pub fn format_command(&self, command: &str) -> String {
        format!("  {}", self.command.apply_to(format!("$ {}", command)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("🐝 {}", self.emphasis.apply_to(title))
    }

    /// Prefix `text` with the marker for `outcome` and style it.
    pub fn format_outcome(&self, outcome: &StepOutcome, text: &str) -> String {
        match outcome {
            StepOutcome::Satisfied { .. } | StepOutcome::Installed => self.format_success(text),
            StepOutcome::WouldInstall => self.pending.apply_to(format!("○ {}", text)).to_string(),
            StepOutcome::Failed { .. } => self.format_error(text),
        }
    }
}

/// Colors are on for a terminal stdout unless `NO_COLOR` is set.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}
