//! Version probe for installed tools.
//!
//! A probe runs the tool, reads its version banner, and compares it against
//! the requirement's minimum. A tool that cannot be started, exits non-zero,
//! or prints no recognizable version is reported as [`ProbeOutcome::Absent`].
//! None of these are errors: the caller treats them as "needs installation".
//!
//! # Example
//!
//! ```no_run
//! use beesetup::requirements::probe::VersionProbe;
//! use beesetup::requirements::version::Version;
//! use beesetup::shell::execute;
//!
//! let probe = VersionProbe::new(&execute);
//! let outcome = probe.probe_version("cmake", Some(&Version::new(3, 26)));
//! println!("cmake: {:?}", outcome);
//! ```

use crate::requirements::registry::{ToolCheck, ToolRequirement};
use crate::requirements::version::{extract_version, Version};
use crate::shell::{CommandOptions, CommandSpec, RunCommand};

/// Result of probing one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Present and new enough. The version is `None` for checks without a banner.
    Satisfied(Option<Version>),
    /// Present but older than required.
    BelowMinimum { found: Version, required: Version },
    /// Missing, failing, or without a parseable version.
    Absent,
}

impl ProbeOutcome {
    /// Whether the tool can be used as is.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, ProbeOutcome::Satisfied(_))
    }
}

/// Probes tools through an injected command runner.
pub struct VersionProbe<'a> {
    run_command: RunCommand<'a>,
}

impl<'a> VersionProbe<'a> {
    /// Create a probe that runs commands with `run_command`.
    pub fn new(run_command: RunCommand<'a>) -> Self {
        Self { run_command }
    }

    /// Probe a requirement using its configured check.
    pub fn probe(&self, requirement: &ToolRequirement) -> ProbeOutcome {
        match requirement.check {
            ToolCheck::VersionFlag => {
                self.probe_version(requirement.command, requirement.minimum_version.as_ref())
            }
            ToolCheck::Succeeds(args) => self.probe_succeeds(requirement.command, args),
        }
    }

    /// Run `<command> --version` and compare against `minimum`.
    pub fn probe_version(&self, command: &str, minimum: Option<&Version>) -> ProbeOutcome {
        let spec = CommandSpec::new(command, ["--version"]);
        let Some(output) = self.captured_output(&spec) else {
            return ProbeOutcome::Absent;
        };

        let Some(found) = extract_version(&output) else {
            tracing::debug!("{}: no version in output", command);
            return ProbeOutcome::Absent;
        };

        match minimum {
            Some(required) if !found.satisfies(required) => {
                tracing::debug!("{} {} is older than {}", command, found, required);
                ProbeOutcome::BelowMinimum {
                    found,
                    required: *required,
                }
            }
            _ => ProbeOutcome::Satisfied(Some(found)),
        }
    }

    /// Run `<command> <args>`; success with non-empty stdout means present.
    pub fn probe_succeeds(&self, command: &str, args: &[&str]) -> ProbeOutcome {
        let spec = CommandSpec::new(command, args.iter().copied());
        match (self.run_command)(&spec, &CommandOptions::captured()) {
            Ok(result) if result.success && !result.stdout.trim().is_empty() => {
                ProbeOutcome::Satisfied(None)
            }
            _ => ProbeOutcome::Absent,
        }
    }

    fn captured_output(&self, spec: &CommandSpec) -> Option<String> {
        match (self.run_command)(spec, &CommandOptions::captured()) {
            Ok(result) if result.success => Some(result.combined_output()),
            Ok(result) => {
                tracing::debug!("{} exited with {:?}", spec, result.exit_code);
                None
            }
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        }
    }
}
