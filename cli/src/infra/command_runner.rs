//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution, with an optional timeout that kills the
//! child on all platforms.

use std::io::Read;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`.
///
/// stdout and stderr of the child share a single pipe so the captured text
/// keeps the order the child wrote it in. Without a timeout the child runs
/// until it exits on its own.
pub struct TokioCommandRunner {
    timeout: Option<Duration>,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    async fn execute(&self, dir: Option<&Path>, program: &str, args: &[&str]) -> Result<Output> {
        tracing::debug!(program, ?args, dir = ?dir, "spawning");

        let (mut reader, writer) = std::io::pipe().context("creating output pipe")?;
        let writer_err = writer.try_clone().context("duplicating output pipe")?;

        // The command holds the parent's copies of the write end; it must be
        // dropped before reading or the reader never sees EOF.
        let mut child = {
            let mut cmd = tokio::process::Command::new(program);
            cmd.args(args)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(writer_err)
                .kill_on_drop(true);
            if let Some(dir) = dir {
                cmd.current_dir(dir);
            }
            cmd.spawn().with_context(|| format!("failed to spawn {program}"))?
        };

        let reader_task = tokio::task::spawn_blocking(move || {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).map(|_| buf)
        });

        let status = match self.timeout {
            None => child.wait().await,
            Some(timeout) => {
                tokio::select! {
                    status = child.wait() => status,
                    () = tokio::time::sleep(timeout) => {
                        let _ = child.kill().await;
                        anyhow::bail!("{program} timed out after {}s", timeout.as_secs())
                    }
                }
            }
        }
        .with_context(|| format!("waiting for {program}"))?;

        let stdout = reader_task
            .await
            .context("joining output reader")?
            .with_context(|| format!("reading output of {program}"))?;

        Ok(Output { status, stdout, stderr: Vec::new() })
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.execute(None, program, args).await
    }

    async fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<Output> {
        self.execute(Some(dir), program, args).await
    }
}
