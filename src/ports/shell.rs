//! Shell executor port for running external commands.

use serde::{Deserialize, Serialize};

/// The output of a shell command execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// Whether the process reported a successful exit status.
    pub success: bool,
    /// The exit code of the process, if it exited normally.
    #[serde(default)]
    pub exit_code: Option<i32>,
    /// The captured standard output, decoded as UTF-8.
    pub stdout: String,
    /// The captured standard error, decoded as UTF-8.
    pub stderr: String,
}

/// Executes shell commands.
///
/// Abstracting shell execution allows deterministic replay by recording
/// and replaying command outputs during cassette playback.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command string and returns its captured output.
    ///
    /// A non-success exit status is not an error here; callers inspect
    /// [`ShellOutput::success`].
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    fn run(&self, command: &str) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>>;
}
