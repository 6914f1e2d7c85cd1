//! Application service — repository synchronization step.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::domain::error::BuildError;
use crate::domain::platform::PlatformProfile;
use crate::domain::sync::{GIT, SyncAction};

/// Bring the workspace up to date with `branch` of the profile's repository.
///
/// Clones when the workspace is missing and pulls otherwise. Exactly one git
/// command runs per call.
///
/// # Errors
///
/// Returns [`BuildError::SyncFailure`] if git exits non-zero or the workspace
/// exists without being a git checkout. Spawn failures and timeouts are
/// returned as-is.
pub async fn sync_repository(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    profile: &PlatformProfile,
    branch: &str,
) -> Result<SyncAction> {
    let workspace = profile.workspace_path.as_path();
    let action = SyncAction::decide(fs.exists(workspace));
    tracing::debug!(?action, workspace = %workspace.display(), "selected sync action");

    if action == SyncAction::Pull && !fs.exists(&workspace.join(".git")) {
        return Err(BuildError::SyncFailure {
            command: action.label().to_string(),
            output: format!(
                "{} exists but is not a git repository. Remove it and try again.",
                workspace.display()
            ),
        }
        .into());
    }

    let args = action.git_args(&profile.repo_url, workspace, branch);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = match action {
        SyncAction::Clone => {
            reporter.step(&format!(
                "cloning {} (branch: {branch})...",
                profile.repo_url
            ));
            runner.run(GIT, &args).await
        }
        SyncAction::Pull => {
            reporter.step(&format!("pulling origin/{branch} into {}...", workspace.display()));
            runner.run_in(workspace, GIT, &args).await
        }
    }
    .with_context(|| format!("running {}", action.label()))?;

    if !output.status.success() {
        return Err(BuildError::SyncFailure {
            command: action.label().to_string(),
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
        }
        .into());
    }

    reporter.success(match action {
        SyncAction::Clone => "repository cloned",
        SyncAction::Pull => "repository updated",
    });
    Ok(action)
}
