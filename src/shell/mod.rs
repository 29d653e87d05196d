//! External command execution and process environment.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult, CommandSpec, RunCommand};
pub use platform::{append_to_process_path, is_elevated, path_with_appended};
