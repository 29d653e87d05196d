//! The `copy-headers` command.

use crate::cli::args::CopyHeadersArgs;
use crate::error::{Result, SetupError};
use crate::headers::HeaderSync;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Mirrors headers from `SRC` into `DST`.
pub struct CopyHeadersCommand {
    args: CopyHeadersArgs,
}

impl CopyHeadersCommand {
    /// Create a new copy-headers command.
    pub fn new(args: CopyHeadersArgs) -> Self {
        Self { args }
    }
}

impl Command for CopyHeadersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let sync = HeaderSync::new(&self.args.source, &self.args.destination)
            .with_extensions(&self.args.extensions);

        match sync.run(ui) {
            Ok(report) => {
                tracing::info!("Copied {} headers", report.copied.len());
                Ok(CommandResult::success())
            }
            Err(e @ SetupError::InvalidSourceDir { .. }) => {
                ui.error(&format!("Error: {}.", e));
                if self.args.strict {
                    Ok(CommandResult::failure(1))
                } else {
                    Ok(CommandResult::success())
                }
            }
            Err(e) => Err(e),
        }
    }
}
