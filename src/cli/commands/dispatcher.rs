//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, returning the exit status to use.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher; relative paths resolve against `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Directory the dispatcher was created for.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Route the CLI subcommand to its implementation and run it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                super::install::InstallCommand::new(&self.working_dir, args.clone()).execute(ui)
            }
            Some(Commands::CopyHeaders(args)) => {
                super::copy_headers::CopyHeadersCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::install::InstallCommand::new(&self.working_dir, cli.install.clone())
                .execute(ui),
        }
    }
}
