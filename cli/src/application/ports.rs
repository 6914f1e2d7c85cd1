//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Both methods merge the child's stderr into its stdout, in the order the
/// child wrote them: the combined text is returned in `Output::stdout` and
/// `Output::stderr` is always empty.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program in the current working directory and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. A non-zero exit is NOT an error.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with `dir` as its working directory.
    ///
    /// # Errors
    ///
    /// Same as [`CommandRunner::run`].
    async fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Pass a child process's captured output through to the user.
    fn relay(&self, output: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the filesystem operations the pipeline performs.
pub trait LocalFs {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Copy the file at `from` to `to`, overwriting `to`.
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;
    /// Delete the file at `path`.
    fn remove_file(&self, path: &Path) -> Result<()>;
    /// Set unix permission bits. No-op on other platforms.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;
    /// Resolve `path` to an absolute path with symlinks followed.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}
