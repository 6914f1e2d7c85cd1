//! Repository synchronization policy.
//!
//! Pure functions only. The caller probes the filesystem and passes the
//! results in; this module decides what git should do.

use std::path::Path;

/// The git client binary.
pub const GIT: &str = "git";

/// What to do with the workspace before building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Workspace is absent: shallow single-branch clone into it.
    Clone,
    /// Workspace is an existing checkout: pull the branch from `origin`.
    Pull,
}

impl SyncAction {
    /// Clone when the workspace is missing, pull otherwise.
    #[must_use]
    pub fn decide(workspace_exists: bool) -> Self {
        if workspace_exists { Self::Pull } else { Self::Clone }
    }

    /// Arguments passed to git for this action.
    ///
    /// `Clone` runs from anywhere and names the target directory; `Pull` must
    /// run with the checkout as working directory.
    #[must_use]
    pub fn git_args(self, repo_url: &str, workspace: &Path, branch: &str) -> Vec<String> {
        match self {
            Self::Clone => vec![
                "clone".to_string(),
                "--branch".to_string(),
                branch.to_string(),
                "--depth".to_string(),
                "1".to_string(),
                repo_url.to_string(),
                workspace.to_string_lossy().into_owned(),
            ],
            Self::Pull => vec!["pull".to_string(), "origin".to_string(), branch.to_string()],
        }
    }

    /// Short label used in progress and error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clone => "git clone",
            Self::Pull => "git pull",
        }
    }
}
