//! beesetup CLI entry point.

use std::process::ExitCode;

use beesetup::cli::{Cli, CommandDispatcher};
use beesetup::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("beesetup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("beesetup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("beesetup starting with args: {:?}", cli);

    let output_mode = if cli.wants_json() {
        OutputMode::Silent
    } else {
        OutputMode::from_flags(cli.verbose, cli.quiet)
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&format!("Error: cannot read current directory: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
