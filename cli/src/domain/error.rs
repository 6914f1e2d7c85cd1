//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! Every variant is fatal to the run; they convert to `anyhow::Error` via `?`
//! and anything that is not one of these is the catch-all.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the sync-and-build pipeline.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("{command} failed:\n{output}")]
    SyncFailure { command: String, output: String },

    #[error("Script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("Build script failed with {}", describe_exit(.code))]
    BuildFailure { code: Option<i32>, output: String },
}

impl BuildError {
    /// Captured child output attached to the error, if any.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::SyncFailure { output, .. } | Self::BuildFailure { output, .. } => Some(output),
            Self::UnsupportedPlatform(_) | Self::ScriptNotFound(_) => None,
        }
    }
}

#[allow(clippy::ref_option)] // called with a borrowed field from the error format
fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "no exit code (terminated by signal)".to_string(), |c| format!("code {c}"))
}
