//! gitprompt - git status for the shell prompt
//!
//! gitprompt reads the state of the repository containing the working
//! directory and prints it through a small template language made of
//! colors, attributes, data placeholders and groups that vanish when their
//! data has nothing to say.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, wires everything up)
//! - [`core`] - Status model and configuration
//! - [`git`] - Single interface for all Git reads
//! - [`render`] - Format string interpreter and ANSI emission
//! - [`ui`] - Diagnostics on stderr
//!
//! # Invariants
//!
//! 1. Rendering never fails; any format string produces some output
//! 2. Outside a repository nothing is printed and the exit code is 0
//! 3. In zsh mode nothing but the prompt reaches the terminal

pub mod cli;
pub mod core;
pub mod git;
pub mod render;
pub mod ui;
