//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use syncbuild::app::{AppContext, OutputFlags};
use syncbuild::commands;

/// Sync the platform build repository and run its build script
///
/// Without a subcommand, behaves like `run`.
#[derive(Parser)]
#[command(
    name = "syncbuild",
    version,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Suppress progress output (build output is still shown)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: commands::run::RunArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sync the repository and run the build script (default)
    Run(commands::run::RunArgs),

    /// Show the resolved platform profile without running anything
    Profile(commands::profile::ProfileArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected command fails.
    pub async fn run(self) -> Result<()> {
        let Cli { quiet, no_color, command, run, .. } = self;
        let app = AppContext::new(&OutputFlags { no_color, quiet });
        match command {
            Some(Command::Run(args)) => commands::run::run(&args, &app).await,
            Some(Command::Profile(args)) => commands::profile::run(&args, &app),
            None => commands::run::run(&run, &app).await,
        }
    }
}
