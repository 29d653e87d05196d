//! Output verbosity.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including the commands being run.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show warnings, errors and the final summary.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Pick a mode from the global `--verbose` / `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode echoes commands before running them.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows routine progress messages.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows warnings and summaries.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
