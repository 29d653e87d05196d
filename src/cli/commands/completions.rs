//! Shell completions generation.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;
use std::io::Write;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Write the completion script for the selected shell.
    pub fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "beesetup", out);
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        self.write_to(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
