//! `syncbuild profile` — show what a run would do, without doing it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::commands::SourceArgs;
use crate::domain::platform::{LaunchStrategy, OperatingSystem, PlatformProfile};
use crate::domain::sync::SyncAction;

/// Arguments for the profile command.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Resolve for this OS identifier instead of the host's
    #[arg(long, value_name = "OS")]
    pub os: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Resolved profile plus the decisions derived from it.
#[derive(Debug, Serialize)]
pub struct ProfileReport {
    #[serde(flatten)]
    pub profile: PlatformProfile,
    pub script_source: PathBuf,
    pub launch_strategy: LaunchStrategy,
    pub sync_action: &'static str,
    pub branch: String,
}

/// Run `syncbuild profile`.
///
/// # Errors
///
/// Returns an error if the OS identifier is unsupported or the default
/// directories cannot be determined.
pub fn run(args: &ProfileArgs, app: &AppContext) -> Result<()> {
    let os: OperatingSystem = match &args.os {
        Some(id) => id.parse()?,
        None => OperatingSystem::host()?,
    };
    let settings = args.source.settings(None, false)?;
    let profile = settings.profile(os);
    let action = SyncAction::decide(profile.workspace_path.exists());

    let report = ProfileReport {
        script_source: settings.script_source(&profile),
        launch_strategy: profile.launch_strategy(),
        sync_action: match action {
            SyncAction::Clone => "clone",
            SyncAction::Pull => "pull",
        },
        branch: settings.branch,
        profile,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("JSON serialization failed")?;
        println!("{json}");
        return Ok(());
    }

    let ctx = &app.output;
    ctx.header("Build profile");
    ctx.kv("OS        ", &report.profile.operating_system.to_string());
    ctx.kv("Repository", &report.profile.repo_url);
    ctx.kv("Branch    ", &report.branch);
    ctx.kv("Workspace ", &report.profile.workspace_path.display().to_string());
    ctx.kv("Script    ", &report.script_source.display().to_string());
    ctx.kv("Launch    ", &format!("{:?}", report.launch_strategy).to_lowercase());
    ctx.kv("Sync      ", report.sync_action);
    Ok(())
}
