//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module imports
//! `git2`, and nothing shells out to the git CLI.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - HEAD, branch and upstream resolution
//! - Working tree status counts
//! - Ahead/behind and stash counts
//!
//! # Example
//!
//! ```ignore
//! use gitprompt::git::read_status;
//! use std::path::Path;
//!
//! match read_status(Path::new("."))? {
//!     Some(status) => println!("{}", status.head()),
//!     None => {} // not a repository
//! }
//! ```

mod interface;

pub use interface::{read_status, short_ref_name, Git, GitError, WorktreeStatus};
