//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--format <FORMAT>`: Format string (falls back to `$GITPROMPT_FORMAT`,
//!   the config file, then the built-in default)
//! - `--zsh`: Wrap output in zsh width control characters
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--version`: Show version
//! - `--help`: Show help, including the format reference

use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

use super::help;

/// gitprompt - Compact, colorized git status for shell prompts
#[derive(Parser, Debug)]
#[command(name = "gitprompt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Define output format (see below)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Print zsh width control characters
    #[arg(long)]
    pub zsh: bool,

    /// Run as if gitprompt was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// The format reference is attached to `--help` at runtime because it
    /// includes the default format rendered against an example status.
    pub fn parse_args() -> Self {
        let matches = Self::command()
            .after_help(help::format_reference())
            .get_matches();

        match Self::from_arg_matches(&matches) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }
}
