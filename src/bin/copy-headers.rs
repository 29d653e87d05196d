//! Stand-alone header mirroring tool used from build scripts.
//!
//! `copy-headers <SRC> <DST>` copies every `.h`/`.hpp` under `SRC` into the
//! same relative path under `DST`.

use std::process::ExitCode;

use beesetup::cli::commands::copy_headers::CopyHeadersCommand;
use beesetup::cli::{Command, CopyHeadersCli};
use beesetup::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("beesetup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("beesetup=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = CopyHeadersCli::parse();
    init_tracing(cli.debug);

    let mode = OutputMode::from_flags(false, cli.quiet);
    let mut ui = create_ui(mode);

    match CopyHeadersCommand::new(cli.args).execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
