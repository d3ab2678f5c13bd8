//! core
//!
//! Domain types and configuration for gitprompt.
//!
//! # Modules
//!
//! - [`status`] - The repository status record rendered into the prompt
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - The status record is plain data; producing it is the job of [`crate::git`]
//! - Configuration is optional; every value has a default

pub mod config;
pub mod status;
