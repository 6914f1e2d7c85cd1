//! Run configuration record.
//!
//! Pure data only — no I/O, no async, no filesystem access. Built once by
//! the command layer from flags and environment and passed to each step.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::platform::{OperatingSystem, PlatformProfile};

// ── Defaults ─────────────────────────────────────────────────────────────────

/// Build script base name when `BUILD_SCRIPT` is unset.
pub const DEFAULT_SCRIPT_NAME: &str = "build";

/// Branch when `GIT_BRANCH` is unset.
pub const DEFAULT_BRANCH: &str = "main";

// ── Settings ─────────────────────────────────────────────────────────────────

/// Everything a run needs besides the detected OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Checkout directory; also the build script's working directory.
    pub workspace: PathBuf,
    /// Script base name without extension.
    pub script_name: String,
    /// Branch to clone or pull.
    pub branch: String,
    /// Directory holding the build scripts to stage.
    pub scripts_dir: PathBuf,
    /// Replaces the per-OS repository URL when set.
    pub repo_url: Option<String>,
    /// Kill any child process running longer than this.
    pub timeout: Option<Duration>,
    /// Leave the staged script in the workspace after the build.
    pub keep_script: bool,
}

impl Settings {
    /// Resolve the platform profile for `os` under these settings.
    #[must_use]
    pub fn profile(&self, os: OperatingSystem) -> PlatformProfile {
        PlatformProfile::resolve(os, &self.workspace, &self.script_name, self.repo_url.as_deref())
    }

    /// Source path of the script that will be staged.
    #[must_use]
    pub fn script_source(&self, profile: &PlatformProfile) -> PathBuf {
        self.scripts_dir.join(&profile.script_filename)
    }
}
