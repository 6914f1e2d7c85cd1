//! Application context — state shared by the command handlers.
//!
//! Constructed once in `Cli::run()` from the global flags.

use std::time::Duration;

use crate::infra::command_runner::TokioCommandRunner;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress progress output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &OutputFlags) -> Self {
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
        }
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Process runner with the given per-child timeout.
    #[must_use]
    pub fn command_runner(&self, timeout: Option<Duration>) -> TokioCommandRunner {
        TokioCommandRunner::new(timeout)
    }
}
