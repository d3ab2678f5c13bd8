//! ui::output
//!
//! User-facing diagnostics.
//!
//! # Design
//!
//! The prompt itself goes to stdout untouched. Everything else goes to
//! stderr and respects the verbosity, which is `Quiet` in zsh mode so a
//! failure never leaks into the shell prompt.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - no diagnostics
    Quiet,
    /// Normal mode - one-line errors
    Normal,
    /// Debug mode - full error chains
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. Quiet wins over debug.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Format an error for display at the given verbosity.
///
/// Returns `None` in quiet mode.
pub fn format_error(err: &anyhow::Error, verbosity: Verbosity) -> Option<String> {
    match verbosity {
        Verbosity::Quiet => None,
        Verbosity::Normal => Some(format!("error: {:#}", err)),
        Verbosity::Debug => Some(format!("error: {:?}", err)),
    }
}

/// Print an error (suppressed in quiet mode).
pub fn report(err: &anyhow::Error, verbosity: Verbosity) {
    if let Some(message) = format_error(err, verbosity) {
        eprintln!("{}", message);
    }
}

/// Print a warning (suppressed in quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}
