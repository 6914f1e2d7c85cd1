//! Application service — build script invocation.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::invocation::BuildInvocation;
use crate::domain::platform::PlatformProfile;

/// Run the staged script inside the workspace and capture the result.
///
/// The child's combined output is relayed to the reporter whether or not the
/// script succeeds. A non-zero exit is recorded in the returned invocation,
/// not raised.
///
/// # Errors
///
/// Returns an error only if the script cannot be spawned or times out.
pub async fn run_build(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    profile: &PlatformProfile,
    script: &Path,
) -> Result<BuildInvocation> {
    let mut invocation =
        BuildInvocation::new(script, &profile.workspace_path, profile.launch_strategy());
    reporter.step(&format!("executing: {}", invocation.display_command()));

    let output = runner
        .run_in(&invocation.working_directory, invocation.program(), &invocation.args())
        .await
        .with_context(|| format!("running build script {}", script.display()))?;

    invocation.captured_output = String::from_utf8_lossy(&output.stdout).into_owned();
    invocation.exit_code = output.status.code();
    tracing::debug!(exit_code = ?invocation.exit_code, "build script finished");

    reporter.relay(&invocation.captured_output);
    Ok(invocation)
}
