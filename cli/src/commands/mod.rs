//! Command implementations

pub mod profile;
pub mod run;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use crate::domain::config::{DEFAULT_BRANCH, DEFAULT_SCRIPT_NAME, Settings};

/// Where the repository and the build script come from.
///
/// Shared by `run` and `profile`; every option falls back to an environment
/// variable so a CI job can configure the tool without flags.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Checkout directory [default: current directory]
    #[arg(long, env = "WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Build script base name, without extension
    #[arg(long, env = "BUILD_SCRIPT", default_value = DEFAULT_SCRIPT_NAME)]
    pub script: String,

    /// Branch to clone or pull
    #[arg(long, env = "GIT_BRANCH", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Directory holding the build scripts [default: directory of this executable]
    #[arg(long, env = "BUILD_SCRIPTS_DIR")]
    pub scripts_dir: Option<PathBuf>,

    /// Repository URL, replacing the per-platform default
    #[arg(long, env = "BUILD_REPO_URL")]
    pub repo_url: Option<String>,
}

impl SourceArgs {
    /// Build the run configuration, filling in directory defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory or the executable's
    /// location cannot be determined.
    pub fn settings(&self, timeout: Option<Duration>, keep_script: bool) -> Result<Settings> {
        // Children run with the workspace as their cwd, so relative paths
        // are resolved against ours first.
        let workspace = match &self.workspace {
            Some(dir) if !dir.as_os_str().is_empty() => absolute(dir)?,
            _ => std::env::current_dir().context("reading current directory")?,
        };
        let scripts_dir = match &self.scripts_dir {
            Some(dir) if !dir.as_os_str().is_empty() => absolute(dir)?,
            _ => crate::infra::fs::exe_dir()?,
        };
        Ok(Settings {
            workspace,
            script_name: non_empty_or(&self.script, DEFAULT_SCRIPT_NAME),
            branch: non_empty_or(&self.branch, DEFAULT_BRANCH),
            scripts_dir,
            repo_url: self.repo_url.clone().filter(|u| !u.is_empty()),
            timeout,
            keep_script,
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("resolving {}", path.display()))
}

/// An empty environment variable counts as unset.
fn non_empty_or(value: &str, default: &str) -> String {
    let value = value.trim();
    let chosen = if value.is_empty() { default } else { value };
    chosen.to_string()
}
