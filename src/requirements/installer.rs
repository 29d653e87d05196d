//! Requirement installation.
//!
//! Walks the OS family's requirement list in order. Each tool is probed
//! first; only tools that are absent or too old get their install commands
//! run. Every install is best-effort: a failure is reported and recorded,
//! and the run moves on to the next tool.

use crate::error::{Result, SetupError};
use crate::requirements::probe::{ProbeOutcome, VersionProbe};
use crate::requirements::registry::{requirements_for, OsFamily, ToolRequirement};
use crate::requirements::status::{RunSummary, StepOutcome};
use crate::shell::{CommandOptions, CommandResult, CommandSpec, RunCommand};
use crate::ui::UserInterface;
use std::path::Path;

/// Mockable dependencies for the installer.
pub struct InstallerContext<'a> {
    /// Run an external command.
    pub run_command: RunCommand<'a>,
    /// Append a directory to the process PATH.
    pub append_path: &'a dyn Fn(&Path),
    /// Already running as root/admin (no `sudo` needed).
    pub elevated: bool,
    /// Probe only; never run install commands.
    pub dry_run: bool,
}

/// Build the default `InstallerContext` for production use.
pub fn default_context(dry_run: bool) -> InstallerContext<'static> {
    InstallerContext {
        run_command: &crate::shell::execute,
        append_path: &crate::shell::append_to_process_path,
        elevated: crate::shell::is_elevated(),
        dry_run,
    }
}

/// Installs the tools one OS family needs.
pub struct Installer<'a> {
    os: OsFamily,
    ctx: InstallerContext<'a>,
}

impl<'a> Installer<'a> {
    /// Create an installer for `os`.
    pub fn new(os: OsFamily, ctx: InstallerContext<'a>) -> Self {
        Self { os, ctx }
    }

    /// The OS family this installer targets.
    pub fn os(&self) -> OsFamily {
        self.os
    }

    /// The command runner, shared with other steps of the run.
    pub fn run_command(&self) -> RunCommand<'a> {
        self.ctx.run_command
    }

    /// Check and install every requirement for the OS family.
    pub fn run(&self, ui: &mut dyn UserInterface) -> RunSummary {
        let mut summary = RunSummary::new(self.os, self.ctx.dry_run);
        ui.message(&format!("Detected OS: {}", self.os));

        let requirements = requirements_for(self.os);
        if requirements.is_empty() {
            ui.warning(&format!(
                "No dependency list for {} ({}); skipping installation",
                self.os,
                std::env::consts::OS
            ));
            return summary;
        }

        for requirement in requirements {
            let outcome = self.install_requirement(requirement, ui);
            summary.record(requirement.name, outcome);
        }
        summary
    }

    /// Probe one requirement and install it if needed.
    pub fn install_requirement(
        &self,
        requirement: &ToolRequirement,
        ui: &mut dyn UserInterface,
    ) -> StepOutcome {
        let probe = VersionProbe::new(self.ctx.run_command);

        match probe.probe(requirement) {
            ProbeOutcome::Satisfied(version) => {
                match version {
                    Some(v) => ui.success(&format!(
                        "{} already installed: version {}",
                        requirement.name, v
                    )),
                    None => ui.success(&format!("{} already installed", requirement.name)),
                }
                return StepOutcome::Satisfied { version };
            }
            ProbeOutcome::BelowMinimum { found, required } => {
                ui.message(&format!(
                    "{} {} is older than the required {}",
                    requirement.name, found, required
                ));
            }
            ProbeOutcome::Absent => {
                tracing::debug!("{} not found", requirement.command);
            }
        }

        if self.ctx.dry_run {
            ui.message(&format!("Would install {}", requirement.name));
            return StepOutcome::WouldInstall;
        }

        let commands = requirement
            .install
            .commands(self.os.package_manager(), self.ctx.elevated);
        if commands.is_empty() {
            let reason = format!("no package manager available on {}", self.os);
            ui.error(&format!("Cannot install {}: {}", requirement.name, reason));
            return StepOutcome::Failed { reason };
        }

        ui.message(&format!("Installing {}...", requirement.name));
        let options = if ui.output_mode().shows_progress() {
            CommandOptions::inherited()
        } else {
            CommandOptions::captured()
        };

        for command in &commands {
            ui.show_command(&command.to_string());
            if let Err(err) = self.run_install_command(command, &options) {
                tracing::warn!("{}", err);
                let reason = err.to_string();
                ui.error(&format!("Failed to install {}: {}", requirement.name, reason));
                return StepOutcome::Failed { reason };
            }
        }

        if let Some(dir_fn) = requirement.path_after_install {
            (self.ctx.append_path)(&dir_fn());
        }

        ui.success(&format!("Installed {}", requirement.name));
        StepOutcome::Installed
    }

    fn run_install_command(&self, command: &CommandSpec, options: &CommandOptions) -> Result<()> {
        let result = (self.ctx.run_command)(command, options)?;
        if result.success {
            Ok(())
        } else {
            Err(command_failed(command, &result))
        }
    }
}

fn command_failed(command: &CommandSpec, result: &CommandResult) -> SetupError {
    let detail = result
        .stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string);
    SetupError::CommandFailed {
        command: command.to_string(),
        code: result.exit_code,
        detail,
    }
}
