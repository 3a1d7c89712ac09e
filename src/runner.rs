//! The command runner: spawn, wait, clean.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::adapters::live::LiveShellExecutor;
use crate::adapters::recording::RecordingShellExecutor;
use crate::adapters::replaying::ReplayingShellExecutor;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::{CassetteError, ShError};
use crate::output::ShOutput;
use crate::ports::shell::ShellExecutor;

/// Runs commands through a [`ShellExecutor`] and shapes the result.
///
/// Every call blocks until the process exits. Constructors wire up the
/// different executors (live, recording, replaying).
pub struct CommandRunner {
    shell: Box<dyn ShellExecutor>,
    /// Present only for recording runners; shared with the recording adapter.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl CommandRunner {
    /// Creates a runner that spawns real processes under `script(1)`.
    #[must_use]
    pub fn live() -> Self {
        Self::with_executor(Box::new(LiveShellExecutor))
    }

    /// Creates a runner over any executor.
    #[must_use]
    pub fn with_executor(shell: Box<dyn ShellExecutor>) -> Self {
        Self { shell, recorder: None }
    }

    /// Creates a live runner that records every command into a cassette.
    ///
    /// Nothing is written until [`CommandRunner::finish`] is called.
    #[must_use]
    pub fn recording(path: &Path, name: &str) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            name,
            env!("CARGO_PKG_VERSION"),
        )));
        let shell = RecordingShellExecutor::new(Box::new(LiveShellExecutor), Arc::clone(&recorder));
        Self { shell: Box::new(shell), recorder: Some(recorder) }
    }

    /// Creates a runner that serves commands from a recorded cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, CassetteError> {
        let cassette = crate::cassette::load(path)?;
        let replayer = CassetteReplayer::new(&cassette);
        Ok(Self::with_executor(Box::new(ReplayingShellExecutor::new(replayer))))
    }

    /// Runs `command` and returns its cleaned output.
    ///
    /// The command is trimmed and handed to the shell verbatim. Standard
    /// output is trimmed to form the raw text, from which the clean text
    /// is derived.
    ///
    /// # Errors
    ///
    /// Returns [`ShError::CommandFailed`] when the process exits with a
    /// non-success status, carrying the trimmed standard error, and
    /// [`ShError::Spawn`] when the executor cannot start it at all.
    pub fn run(&self, command: &str) -> Result<ShOutput, ShError> {
        let command = trim_text(command);
        tracing::debug!(command, "spawning command in pseudo-terminal");

        let output = self
            .shell
            .run(command)
            .map_err(|source| ShError::Spawn { command: command.to_string(), source })?;

        tracing::debug!(
            command,
            success = output.success,
            exit_code = ?output.exit_code,
            stdout_len = output.stdout.len(),
            "command finished"
        );

        if !output.success {
            tracing::warn!(command, exit_code = ?output.exit_code, "command failed");
            return Err(ShError::CommandFailed {
                command: command.to_string(),
                stderr: trim_text(&output.stderr).to_string(),
            });
        }

        Ok(ShOutput::from_raw(trim_text(&output.stdout)))
    }

    /// Finishes a recording runner, writing its cassette.
    ///
    /// Returns the cassette path, or `None` for runners that do not record.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, CassetteError> {
        let Self { shell, recorder } = self;
        // The recording adapter holds the other reference.
        drop(shell);

        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| CassetteError::Shared)?
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        recorder.finish().map(Some)
    }
}

/// Trims leading and trailing whitespace the way JavaScript `trim` does:
/// byte-order marks are stripped, NEL (U+0085) is kept.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}
