//! core::status
//!
//! The repository status record consumed by the renderer.
//!
//! # Lifecycle
//!
//! A [`GitStatus`] is built once per invocation from live repository state
//! (see [`crate::git::Git::status`]), read by the renderer, and dropped after
//! output is produced. The renderer never mutates it.
//!
//! # Derived Flags
//!
//! `clean` and `outdated` are stored rather than computed on the fly so that
//! callers (and tests) can set them explicitly. The git layer always fills
//! them through [`GitStatus::with_derived_flags`].

/// Number of hex digits shown when HEAD is detached.
pub const SHORT_HASH_LEN: usize = 7;

/// Parsed status of the repository the prompt is rendered for.
///
/// # Example
///
/// ```
/// use gitprompt::core::status::GitStatus;
///
/// let status = GitStatus {
///     commit_hash: "0455b83f923a40f0b485665c44aa068bc25029f5".into(),
///     modified: 2,
///     ..Default::default()
/// }
/// .with_derived_flags();
///
/// assert_eq!(status.head(), "0455b83");
/// assert!(!status.clean);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitStatus {
    /// Full hex object id of HEAD; empty before the first commit
    pub commit_hash: String,
    /// Checked-out branch; empty when HEAD is detached
    pub branch_name: String,
    /// Untracked files
    pub untracked: usize,
    /// Files with unstaged modifications
    pub modified: usize,
    /// Files with staged changes
    pub staged: usize,
    /// Unmerged (conflicted) files
    pub conflicts: usize,
    /// Commits ahead of upstream
    pub ahead: usize,
    /// Commits behind upstream
    pub behind: usize,
    /// Stash entries
    pub stashed: usize,
    /// Upstream branch in short form (`origin/main`); empty if none
    pub upstream: String,
    /// No untracked, modified, staged or conflicted files
    pub clean: bool,
    /// Upstream has commits that are not in HEAD
    pub outdated: bool,
}

impl GitStatus {
    /// Recompute `clean` and `outdated` from the counts.
    ///
    /// `outdated` is `behind > 0`, and is never set without an upstream.
    pub fn with_derived_flags(mut self) -> Self {
        self.clean =
            self.untracked == 0 && self.modified == 0 && self.staged == 0 && self.conflicts == 0;
        self.outdated = self.has_upstream() && self.behind > 0;
        self
    }

    /// First [`SHORT_HASH_LEN`] characters of the commit hash.
    ///
    /// Shorter hashes are returned whole.
    pub fn short_hash(&self) -> &str {
        match self.commit_hash.char_indices().nth(SHORT_HASH_LEN) {
            Some((end, _)) => &self.commit_hash[..end],
            None => &self.commit_hash,
        }
    }

    /// Branch name, or the short hash when HEAD is detached.
    pub fn head(&self) -> &str {
        if self.branch_name.is_empty() {
            self.short_hash()
        } else {
            &self.branch_name
        }
    }

    /// Check if an upstream branch is configured.
    pub fn has_upstream(&self) -> bool {
        !self.upstream.is_empty()
    }

    /// A status with every field populated, used to demonstrate formats.
    pub fn example() -> Self {
        GitStatus {
            commit_hash: "0455b83f923a40f0b485665c44aa068bc25029f5".to_string(),
            branch_name: "master".to_string(),
            untracked: 1,
            modified: 2,
            staged: 3,
            conflicts: 4,
            ahead: 5,
            behind: 6,
            stashed: 7,
            upstream: "origin/master".to_string(),
            clean: false,
            outdated: false,
        }
        .with_derived_flags()
    }
}
