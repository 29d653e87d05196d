//! Text rendering of the run summary.

use super::theme::SetupTheme;
use crate::requirements::status::{RunSummary, StepOutcome};

/// Render `summary` as boxed lines.
pub fn summary_lines(summary: &RunSummary, theme: &SetupTheme) -> Vec<String> {
    let mut lines = Vec::new();
    let border = |s: &str| theme.muted.apply_to(s.to_string()).to_string();

    lines.push(format!(
        "  {} {}",
        border("┌─"),
        theme.emphasis.apply_to(format!("Summary ({})", summary.os))
    ));

    for step in &summary.steps {
        lines.push(format!(
            "  {} {}",
            border("│"),
            step_line(&step.name, &step.outcome, theme)
        ));
    }
    if let Some(outcome) = &summary.submodules {
        lines.push(format!(
            "  {} {}",
            border("│"),
            step_line("submodules", outcome, theme)
        ));
    }

    lines.push(format!("  {}", border("├────────────────────────────────────")));
    let mut totals = format!(
        "{} satisfied · {} installed · {} failed",
        summary.satisfied(),
        summary.installed(),
        summary.failed()
    );
    if summary.dry_run {
        totals.push_str(" · dry run");
    }
    lines.push(format!("  {} {}", border("│"), totals));
    lines.push(format!("  {}", border("└────────────────────────────────────")));
    lines
}

fn step_line(name: &str, outcome: &StepOutcome, theme: &SetupTheme) -> String {
    let detail = match outcome {
        StepOutcome::Satisfied {
            version: Some(version),
        } => version.to_string(),
        StepOutcome::Failed { reason } => reason.clone(),
        other => other.label().to_string(),
    };
    theme.format_outcome(outcome, &format!("{:<26} {}", name, detail))
}
