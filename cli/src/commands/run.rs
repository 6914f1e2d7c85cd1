//! `syncbuild run` — sync the repository and run the platform build script.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::pipeline;
use crate::commands::SourceArgs;
use crate::infra::fs::LocalFs;

/// Arguments for the run command.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Kill git or the build script after this many seconds
    #[arg(long, env = "BUILD_TIMEOUT_SECS", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Leave the staged build script in the workspace afterwards
    #[arg(
        long,
        env = "BUILD_KEEP_SCRIPT",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub keep_script: bool,
}

/// Run `syncbuild run`.
///
/// # Errors
///
/// Returns an error if the platform is unsupported, the repository cannot be
/// synced, the build script is missing, or the build script fails.
pub async fn run(args: &RunArgs, app: &AppContext) -> Result<()> {
    let timeout = args.timeout.filter(|s| *s > 0).map(Duration::from_secs);
    let settings = args.source.settings(timeout, args.keep_script)?;
    let runner = app.command_runner(timeout);
    let reporter = app.terminal_reporter();

    pipeline::sync_and_build(&runner, &LocalFs, &reporter, &settings, std::env::consts::OS)
        .await?;
    Ok(())
}
