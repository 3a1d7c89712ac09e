//! Live shell executor that runs commands inside a pseudo-terminal.

use std::process::{Command, Stdio};

use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Program used to allocate the pseudo-terminal.
pub const SCRIPT_PROGRAM: &str = "/usr/bin/script";

/// Builds the `script` arguments for `command`.
///
/// `-q` suppresses the start/done banners and the typescript goes to
/// `/dev/null`, so only the command's own terminal output is captured.
#[must_use]
pub fn script_args(command: &str) -> [&str; 4] {
    ["-q", "/dev/null", "-c", command]
}

/// Live shell executor that wraps each command in `script(1)`.
///
/// Commands see a terminal on stdout, so they keep colours and line
/// buffering. Standard input is the null device.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new(SCRIPT_PROGRAM)
            .args(script_args(command))
            .stdin(Stdio::null())
            .output()?;
        Ok(ShellOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
