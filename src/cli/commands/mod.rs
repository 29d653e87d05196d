//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. `beesetup` with no subcommand runs `install`.

pub mod completions;
pub mod copy_headers;
pub mod dispatcher;
pub mod install;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
