//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module is the **single doorway** to the repository. It reads
//! everything the prompt shows (HEAD, working tree, upstream, stash) and
//! normalizes failures into typed categories.
//!
//! # Error Handling
//!
//! - [`GitError::NotARepo`]: not inside a Git repository
//! - [`GitError::BareRepo`]: repository has no working tree
//! - [`GitError::Internal`]: anything else git2 reports
//!
//! The first two mean "nothing to show" to the caller, see
//! [`GitError::is_not_a_repo`].
//!
//! # Example
//!
//! ```ignore
//! use gitprompt::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let status = git.status()?;
//! println!("on {} ({} modified)", status.head(), status.modified);
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::status::GitStatus;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository has no working tree")]
    BareRepo,

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        GitError::Internal {
            message: format!("{}: {}", context, err.message()),
        }
    }

    /// Check if this error means there is no working tree to report on.
    pub fn is_not_a_repo(&self) -> bool {
        matches!(self, GitError::NotARepo { .. } | GitError::BareRepo)
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Summary of working tree status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorktreeStatus {
    /// Files with staged changes
    pub staged: usize,
    /// Files with unstaged changes
    pub modified: usize,
    /// Untracked files (untracked directories count once)
    pub untracked: usize,
    /// Unmerged files
    pub conflicts: usize,
}

/// The Git interface.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

/// Returns true for the error git2 reports on a repository without commits.
fn is_unborn(err: &git2::Error) -> bool {
    matches!(
        err.code(),
        git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound
    )
}

/// Shorten a full ref name the way `git status` displays upstreams.
///
/// `refs/remotes/origin/main` becomes `origin/main`; `refs/heads/main`
/// (a local upstream) becomes `main`.
pub fn short_ref_name(refname: &str) -> &str {
    refname
        .strip_prefix("refs/remotes/")
        .or_else(|| refname.strip_prefix("refs/heads/"))
        .unwrap_or(refname)
}

/// Read the status of the repository containing `path`.
///
/// Returns `Ok(None)` when `path` is not inside a repository with a working
/// tree, so callers can stay silent rather than report an error.
pub fn read_status(path: &Path) -> Result<Option<GitStatus>, GitError> {
    let git = match Git::open(path) {
        Ok(git) => git,
        Err(e) if e.is_not_a_repo() => {
            log::debug!("{}", e);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    git.status().map(Some)
}

impl Git {
    // =========================================================================
    // Repository Opening
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    /// - [`GitError::Internal`] if a repository was found but cannot be read
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepo {
                    path: path.to_path_buf(),
                }
            } else {
                GitError::from_git2(e, "discover")
            }
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        log::debug!("opened repository at {}", repo.path().display());
        Ok(Self { repo })
    }

    // =========================================================================
    // HEAD
    // =========================================================================

    /// Get the HEAD commit id as hex.
    ///
    /// Returns `None` if HEAD is unborn (no commits yet).
    pub fn head_oid(&self) -> Result<Option<String>, GitError> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if is_unborn(&e) => return Ok(None),
            Err(e) => return Err(GitError::from_git2(e, "HEAD")),
        };

        let commit = head
            .peel_to_commit()
            .map_err(|e| GitError::from_git2(e, "HEAD"))?;

        Ok(Some(commit.id().to_string()))
    }

    /// Get the current branch name, if on a branch.
    ///
    /// An unborn HEAD still names the branch it will create. Returns `None`
    /// only when HEAD is detached.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_string)),
            Ok(_) => Ok(None),
            Err(e) if is_unborn(&e) => {
                let head = self
                    .repo
                    .find_reference("HEAD")
                    .map_err(|e| GitError::from_git2(e, "HEAD"))?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(str::to_string))
            }
            Err(e) => Err(GitError::from_git2(e, "HEAD")),
        }
    }

    // =========================================================================
    // Working Tree Status
    // =========================================================================

    /// Get working tree status counts.
    ///
    /// Conflicted entries count only as conflicts; an entry can be both
    /// staged and modified.
    pub fn worktree_status(&self) -> Result<WorktreeStatus, GitError> {
        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(false)
            .include_ignored(false)
            .renames_head_to_index(true);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(|e| GitError::from_git2(e, "status"))?;

        let mut result = WorktreeStatus::default();

        for entry in statuses.iter() {
            let status = entry.status();

            if status.is_conflicted() {
                result.conflicts += 1;
                continue;
            }

            if status.is_wt_new() {
                result.untracked += 1;
                continue;
            }

            if status.is_index_new()
                || status.is_index_modified()
                || status.is_index_deleted()
                || status.is_index_renamed()
                || status.is_index_typechange()
            {
                result.staged += 1;
            }

            if status.is_wt_modified()
                || status.is_wt_deleted()
                || status.is_wt_renamed()
                || status.is_wt_typechange()
            {
                result.modified += 1;
            }
        }

        Ok(result)
    }

    // =========================================================================
    // Upstream Tracking
    // =========================================================================

    /// Get the full ref name of a branch's configured upstream.
    ///
    /// Read from branch configuration, so it is returned even when the
    /// remote-tracking ref does not exist locally.
    pub fn upstream_ref(&self, branch: &str) -> Result<Option<String>, GitError> {
        let refname = format!("refs/heads/{}", branch);
        match self.repo.branch_upstream_name(&refname) {
            Ok(buf) => Ok(buf.as_str().map(str::to_string)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::from_git2(e, &refname)),
        }
    }

    /// Count commits ahead of and behind `upstream_ref`.
    ///
    /// Returns `(0, 0)` when the upstream ref cannot be resolved.
    pub fn ahead_behind(
        &self,
        head_oid: &str,
        upstream_ref: &str,
    ) -> Result<(usize, usize), GitError> {
        let local = git2::Oid::from_str(head_oid).map_err(|e| GitError::from_git2(e, head_oid))?;
        let upstream = match self.repo.refname_to_id(upstream_ref) {
            Ok(oid) => oid,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                log::debug!("upstream {} is gone", upstream_ref);
                return Ok((0, 0));
            }
            Err(e) => return Err(GitError::from_git2(e, upstream_ref)),
        };

        self.repo
            .graph_ahead_behind(local, upstream)
            .map_err(|e| GitError::from_git2(e, upstream_ref))
    }

    // =========================================================================
    // Stash
    // =========================================================================

    /// Number of stash entries (entries in the `refs/stash` reflog).
    pub fn stash_count(&self) -> Result<usize, GitError> {
        match self.repo.reflog("refs/stash") {
            Ok(reflog) => Ok(reflog.len()),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(0),
            Err(e) => Err(GitError::from_git2(e, "refs/stash")),
        }
    }

    // =========================================================================
    // Full Status
    // =========================================================================

    /// Collect everything the prompt can display.
    pub fn status(&self) -> Result<GitStatus, GitError> {
        let branch = self.current_branch()?;
        let commit_hash = self.head_oid()?.unwrap_or_default();
        let worktree = self.worktree_status()?;

        let mut status = GitStatus {
            commit_hash,
            branch_name: branch.clone().unwrap_or_default(),
            untracked: worktree.untracked,
            modified: worktree.modified,
            staged: worktree.staged,
            conflicts: worktree.conflicts,
            stashed: self.stash_count()?,
            ..Default::default()
        };

        if let Some(branch) = branch {
            if let Some(upstream) = self.upstream_ref(&branch)? {
                status.upstream = short_ref_name(&upstream).to_string();
                if !status.commit_hash.is_empty() {
                    let (ahead, behind) = self.ahead_behind(&status.commit_hash, &upstream)?;
                    status.ahead = ahead;
                    status.behind = behind;
                }
            }
        }

        let status = status.with_derived_flags();
        log::debug!(
            "status: head={} upstream={:?} staged={} modified={} untracked={} conflicts={} ahead={} behind={} stashed={}",
            status.head(),
            status.upstream,
            status.staged,
            status.modified,
            status.untracked,
            status.conflicts,
            status.ahead,
            status.behind,
            status.stashed
        );

        Ok(status)
    }
}
