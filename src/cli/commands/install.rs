//! The `install` command: tool installation followed by submodule sync.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::requirements::{default_context, Installer, InstallerContext, OsFamily, RunSummary};
use crate::submodules::sync_submodules;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    working_dir: PathBuf,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(working_dir: &Path, args: InstallArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Directory the submodule sync runs in.
    pub fn repo_root(&self) -> PathBuf {
        match &self.args.repo {
            Some(repo) if repo.is_absolute() => repo.clone(),
            Some(repo) => self.working_dir.join(repo),
            None => self.working_dir.clone(),
        }
    }

    /// Run the installer and submodule sync with the given dependencies.
    pub fn run_with(
        &self,
        os: OsFamily,
        ctx: InstallerContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> RunSummary {
        ui.show_header("BeeEngine development setup");
        let installer = Installer::new(os, ctx);
        let mut summary = installer.run(ui);

        if self.args.skip_submodules {
            tracing::debug!("Submodule sync skipped by flag");
        } else if self.args.dry_run {
            ui.message("Would run: git submodule update --init --recursive");
        } else {
            summary.submodules = Some(sync_submodules(
                installer.run_command(),
                &self.repo_root(),
                ui,
            ));
        }

        summary
    }

    fn exit_status(&self, summary: &RunSummary) -> CommandResult {
        if self.args.strict && summary.has_failures() {
            tracing::info!("Failed steps: {}", summary.failed_steps().join(", "));
            CommandResult::failure(1)
        } else {
            CommandResult::success()
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let summary = self.run_with(
            OsFamily::current(),
            default_context(self.args.dry_run),
            ui,
        );

        if self.args.json {
            let json = serde_json::to_string_pretty(&summary).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            ui.show_summary(&summary);
        }

        Ok(self.exit_status(&summary))
    }
}
