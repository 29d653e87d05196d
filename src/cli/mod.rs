//! Command-line interface for beesetup.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, CopyHeadersArgs, CopyHeadersCli, InstallArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
