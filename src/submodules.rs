//! Git submodule synchronization.

use crate::requirements::status::StepOutcome;
use crate::shell::{CommandOptions, CommandSpec, RunCommand};
use crate::ui::UserInterface;
use std::path::Path;

/// Arguments passed to `git`.
pub const SYNC_ARGS: [&str; 4] = ["submodule", "update", "--init", "--recursive"];

/// Recursively initialize and update submodules under `repo_root`.
///
/// Runs once; a failure is reported with the manual command to retry and
/// returned as [`StepOutcome::Failed`].
pub fn sync_submodules(
    run_command: RunCommand<'_>,
    repo_root: &Path,
    ui: &mut dyn UserInterface,
) -> StepOutcome {
    let spec = CommandSpec::new("git", SYNC_ARGS);
    let options = CommandOptions {
        cwd: Some(repo_root.to_path_buf()),
        capture: !ui.output_mode().shows_progress(),
        ..Default::default()
    };

    ui.message("Initializing Git submodules...");
    ui.show_command(&spec.to_string());

    let reason = match run_command(&spec, &options) {
        Ok(result) if result.success => {
            ui.success("Git submodules initialized successfully.");
            return StepOutcome::Installed;
        }
        Ok(result) => match result.exit_code {
            Some(code) => format!("git exited with code {}", code),
            None => "git was terminated by a signal".to_string(),
        },
        Err(e) => e.to_string(),
    };

    tracing::warn!("submodule sync failed in {}: {}", repo_root.display(), reason);
    ui.error("Failed to initialize Git submodules.");
    ui.show_hint(&format!(
        "You might want to try running '{}' manually.",
        spec
    ));
    StepOutcome::Failed { reason }
}
