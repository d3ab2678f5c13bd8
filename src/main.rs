//! gitprompt binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    gitprompt::cli::run()
}
