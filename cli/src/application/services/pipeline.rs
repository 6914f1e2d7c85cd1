//! Application service — the sync-and-build use-case.
//!
//! Sequences the individual steps. Every failure is fatal and nothing is
//! retried; the only work done after a failure is removing the staged script.

use anyhow::Result;

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::application::services::{build, stage, sync};
use crate::domain::config::Settings;
use crate::domain::error::BuildError;
use crate::domain::invocation::BuildInvocation;
use crate::domain::platform::OperatingSystem;

/// Resolve the platform, sync the repository, stage and run the build script.
///
/// `os` is an OS identifier such as `linux`; the command layer passes the
/// host's.
///
/// # Errors
///
/// Returns [`BuildError::UnsupportedPlatform`], [`BuildError::SyncFailure`],
/// [`BuildError::ScriptNotFound`] or [`BuildError::BuildFailure`] for the
/// corresponding step, or any other error raised along the way.
pub async fn sync_and_build(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    settings: &Settings,
    os: &str,
) -> Result<BuildInvocation> {
    let os: OperatingSystem = os.parse()?;
    let profile = settings.profile(os);
    reporter.step(&format!("detected {os}, using repo {}", profile.repo_url));

    sync::sync_repository(runner, fs, reporter, &profile, &settings.branch).await?;

    let staged = stage::stage_script(fs, reporter, &settings.script_source(&profile), &profile)?;
    let result = build::run_build(runner, reporter, &profile, &staged.path).await;
    if !settings.keep_script {
        stage::cleanup(fs, reporter, &staged);
    }
    let invocation = result?;

    if !invocation.succeeded() {
        return Err(BuildError::BuildFailure {
            code: invocation.exit_code,
            output: invocation.captured_output,
        }
        .into());
    }

    reporter.success("build script executed successfully");
    Ok(invocation)
}
