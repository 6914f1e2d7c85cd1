//! Application service — build script staging and cleanup.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{LocalFs, ProgressReporter};
use crate::domain::error::BuildError;
use crate::domain::platform::PlatformProfile;

/// Permission bits applied to the staged script on unix.
const SCRIPT_MODE: u32 = 0o755;

/// A build script placed in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedScript {
    /// Path of the script inside the workspace.
    pub path: PathBuf,
    /// `false` when the source already was the workspace copy; such a
    /// script is never removed by [`cleanup`].
    pub copied: bool,
}

/// Copy the script at `source` into the profile's workspace.
///
/// # Errors
///
/// Returns [`BuildError::ScriptNotFound`] if `source` does not exist, or an
/// I/O error if the copy fails.
pub fn stage_script(
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    source: &Path,
    profile: &PlatformProfile,
) -> Result<StagedScript> {
    if !fs.exists(source) {
        return Err(BuildError::ScriptNotFound(source.to_path_buf()).into());
    }

    let dest = profile.staged_script_path();
    if is_same_file(fs, source, &dest) {
        tracing::debug!(path = %dest.display(), "script already in workspace, not copying");
        return Ok(StagedScript { path: dest, copied: false });
    }

    reporter.step(&format!("staging {}...", profile.script_filename));
    fs.copy(source, &dest)
        .with_context(|| format!("staging build script into {}", dest.display()))?;
    if let Err(e) = fs.set_permissions(&dest, SCRIPT_MODE) {
        // The caller gets no StagedScript to clean up, so remove the copy here.
        if let Err(rm) = fs.remove_file(&dest) {
            tracing::warn!(path = %dest.display(), error = %rm, "removing staged script failed");
        }
        return Err(e);
    }
    Ok(StagedScript { path: dest, copied: true })
}

/// Remove a staged script copy. Best-effort.
///
/// A failure is reported as a warning and otherwise ignored, so it can never
/// replace the build's own result.
pub fn cleanup(fs: &impl LocalFs, reporter: &impl ProgressReporter, staged: &StagedScript) {
    if !staged.copied {
        return;
    }
    if let Err(e) = fs.remove_file(&staged.path) {
        tracing::warn!(path = %staged.path.display(), error = %e, "cleanup failed");
        reporter.warn(&format!("could not remove staged script: {e:#}"));
    }
}

fn is_same_file(fs: &impl LocalFs, a: &Path, b: &Path) -> bool {
    if !fs.exists(b) {
        return false;
    }
    match (fs.canonicalize(a), fs.canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
