//! CLI argument definitions.
//!
//! [`Cli`] is the `beesetup` entry point; [`CopyHeadersCli`] is the
//! stand-alone `copy-headers` binary, sharing [`CopyHeadersArgs`].

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// BeeEngine development environment bootstrapper.
#[derive(Debug, Parser)]
#[command(name = "beesetup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Install options used when no subcommand is given
    #[command(flatten)]
    pub install: InstallArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Arguments for the installer, from `install` or the bare invocation.
    pub fn install_args(&self) -> Option<&InstallArgs> {
        match &self.command {
            Some(Commands::Install(args)) => Some(args),
            None => Some(&self.install),
            Some(_) => None,
        }
    }

    /// Whether the selected command writes machine-readable output.
    pub fn wants_json(&self) -> bool {
        self.install_args().is_some_and(|args| args.json)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install missing build tools and sync submodules (default)
    Install(InstallArgs),

    /// Mirror header files from one directory tree into another
    CopyHeaders(CopyHeadersArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Probe tools and report what would be installed, without installing
    #[arg(long, env = "BEESETUP_DRY_RUN", value_parser = BoolishValueParser::new())]
    pub dry_run: bool,

    /// Do not run `git submodule update`
    #[arg(long, env = "BEESETUP_SKIP_SUBMODULES", value_parser = BoolishValueParser::new())]
    pub skip_submodules: bool,

    /// Repository root for the submodule sync (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when any step failed
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for header mirroring.
#[derive(Debug, Clone, clap::Args)]
pub struct CopyHeadersArgs {
    /// Directory to scan for headers
    #[arg(value_name = "SRC")]
    pub source: PathBuf,

    /// Directory to mirror headers into
    #[arg(value_name = "DST")]
    pub destination: PathBuf,

    /// Additional header extension (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Exit non-zero when the source is not a directory
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Copy header files from SRC to DST, keeping the directory layout.
#[derive(Debug, Parser)]
#[command(name = "copy-headers")]
#[command(version, about, long_about = None)]
pub struct CopyHeadersCli {
    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(flatten)]
    pub args: CopyHeadersArgs,
}
