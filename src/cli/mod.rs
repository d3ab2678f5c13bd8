//! cli
//!
//! Command-line interface layer for gitprompt.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Initialize logging
//! - Load configuration and select the format string
//! - Map outcomes to exit codes
//!
//! # Exit Codes
//!
//! - `0`: prompt printed, or not inside a repository (nothing printed)
//! - `1`: anything else failed; the message is suppressed with `--zsh` so a
//!   broken repository never corrupts the shell prompt

pub mod args;
mod help;
pub mod prompt;

pub use args::Cli;
pub use prompt::{prompt, Context};

use std::process::ExitCode;

use crate::core::config::{Config, FORMAT_ENV};
use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            output::report(
                &anyhow::Error::new(e),
                Verbosity::from_flags(cli.zsh, cli.debug),
            );
            return ExitCode::FAILURE;
        }
    };
    for warning in config.warnings() {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            Verbosity::from_flags(cli.zsh || config.zsh(), cli.debug),
        );
    }

    let ctx = Context {
        cwd: cli.cwd.clone(),
        format: cli.format.clone(),
        env_format: std::env::var(FORMAT_ENV).ok(),
        zsh: cli.zsh || config.zsh(),
    };

    match prompt(&ctx, &config, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::report(&e, Verbosity::from_flags(ctx.zsh, cli.debug));
            ExitCode::FAILURE
        }
    }
}

/// Initialize the `log` backend.
///
/// Logging is off unless `--debug` is given, since anything on the terminal
/// while the shell draws its prompt is noise. `RUST_LOG` overrides both.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "off" };
    // A logger may already be installed when run() is called more than once.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init()
        .ok();
}
