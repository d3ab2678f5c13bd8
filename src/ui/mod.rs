//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Error and warning display
//!
//! # Design
//!
//! All diagnostics go through this module so quiet (zsh) mode is honored
//! in one place.

pub mod output;
