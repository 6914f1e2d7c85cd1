//! Platform resolution — maps an OS identifier to a build profile.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::BuildError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Repository holding the Windows build tree.
pub const WINDOWS_REPO_URL: &str = "https://github.com/HAHAH07/verbose-train.git";

/// Repository shared by the Linux and macOS build trees.
pub const UNIX_REPO_URL: &str = "https://github.com/your-org/linux-build-repo.git";

// ── Operating system ─────────────────────────────────────────────────────────

/// Operating systems with a known build profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Windows,
    Linux,
    #[serde(rename = "macos")]
    MacOs,
}

impl OperatingSystem {
    /// The operating system this binary was compiled for.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnsupportedPlatform`] on any target other than
    /// windows, linux or macos.
    pub fn host() -> Result<Self, BuildError> {
        std::env::consts::OS.parse()
    }

    /// Extension of the build script for this OS, without the dot.
    #[must_use]
    pub fn script_extension(self) -> &'static str {
        match self {
            Self::Windows => "bat",
            Self::Linux | Self::MacOs => "sh",
        }
    }

    /// Default repository URL for this OS.
    #[must_use]
    pub fn default_repo_url(self) -> &'static str {
        match self {
            Self::Windows => WINDOWS_REPO_URL,
            Self::Linux | Self::MacOs => UNIX_REPO_URL,
        }
    }
}

impl FromStr for OperatingSystem {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "macos" | "darwin" => Ok(Self::MacOs),
            _ => Err(BuildError::UnsupportedPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::MacOs => "macos",
        })
    }
}

// ── Launch strategy ──────────────────────────────────────────────────────────

/// How a build script is handed to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStrategy {
    /// Execute the script path directly.
    Direct,
    /// Route through the command interpreter (`cmd /C`).
    Shell,
}

impl LaunchStrategy {
    /// Pick the strategy from the script's extension.
    ///
    /// Batch files cannot be executed without the interpreter, so `bat` and
    /// `cmd` go through the shell and everything else runs directly.
    #[must_use]
    pub fn for_script(script: &Path) -> Self {
        let is_batch = script
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("bat") || e.eq_ignore_ascii_case("cmd"));
        if is_batch { Self::Shell } else { Self::Direct }
    }
}

// ── Profile ──────────────────────────────────────────────────────────────────

/// Everything that differs between platforms for a single run.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformProfile {
    pub operating_system: OperatingSystem,
    pub repo_url: String,
    pub workspace_path: PathBuf,
    pub script_filename: String,
}

impl PlatformProfile {
    /// Resolve the profile for `os`.
    ///
    /// `repo_url` overrides the per-OS default when set.
    #[must_use]
    pub fn resolve(
        os: OperatingSystem,
        workspace_path: &Path,
        script_name: &str,
        repo_url: Option<&str>,
    ) -> Self {
        Self {
            operating_system: os,
            repo_url: repo_url.unwrap_or(os.default_repo_url()).to_string(),
            workspace_path: workspace_path.to_path_buf(),
            script_filename: script_filename(script_name, os),
        }
    }

    /// Where the staged script lives inside the workspace.
    #[must_use]
    pub fn staged_script_path(&self) -> PathBuf {
        self.workspace_path.join(&self.script_filename)
    }

    /// Launch strategy for this profile's script.
    #[must_use]
    pub fn launch_strategy(&self) -> LaunchStrategy {
        LaunchStrategy::for_script(Path::new(&self.script_filename))
    }
}

/// File name of the build script for `os`, e.g. `build.sh`.
#[must_use]
pub fn script_filename(base: &str, os: OperatingSystem) -> String {
    format!("{base}.{}", os.script_extension())
}
