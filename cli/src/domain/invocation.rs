//! Build script invocation — command construction and result.

use std::path::{Path, PathBuf};

use crate::domain::platform::LaunchStrategy;

/// Flag passed to every build script.
pub const RELEASE_FLAG: &str = "--config=release";

/// Command interpreter used for [`LaunchStrategy::Shell`].
pub const WINDOWS_SHELL: &str = "cmd";

/// One execution of the build script.
///
/// `command` is the full argv, program first. The captured output and exit
/// code stay `None`/empty until the child has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInvocation {
    pub command: Vec<String>,
    pub working_directory: PathBuf,
    pub captured_output: String,
    pub exit_code: Option<i32>,
}

impl BuildInvocation {
    /// Prepare an invocation of `script` inside `working_directory`.
    #[must_use]
    pub fn new(script: &Path, working_directory: &Path, strategy: LaunchStrategy) -> Self {
        let script = script.to_string_lossy().into_owned();
        let command = match strategy {
            LaunchStrategy::Direct => vec![script, RELEASE_FLAG.to_string()],
            LaunchStrategy::Shell => vec![
                WINDOWS_SHELL.to_string(),
                "/C".to_string(),
                script,
                RELEASE_FLAG.to_string(),
            ],
        };
        Self {
            command,
            working_directory: working_directory.to_path_buf(),
            captured_output: String::new(),
            exit_code: None,
        }
    }

    /// Program to spawn.
    #[must_use]
    pub fn program(&self) -> &str {
        self.command.first().map_or("", String::as_str)
    }

    /// Arguments after the program.
    #[must_use]
    pub fn args(&self) -> Vec<&str> {
        self.command.iter().skip(1).map(String::as_str).collect()
    }

    /// `true` when the child finished with exit code 0.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// The command line as shown to the user.
    #[must_use]
    pub fn display_command(&self) -> String {
        self.command.join(" ")
    }
}
