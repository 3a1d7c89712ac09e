//! Error types for running commands and handling cassettes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::sh`] and [`crate::runner::CommandRunner::run`].
#[derive(Error, Debug)]
pub enum ShError {
    /// The process exited with a non-success status.
    ///
    /// Non-zero exit codes, missing commands and signals all land here.
    #[error("Command failed: {command}\n{stderr}")]
    CommandFailed {
        /// The trimmed command text.
        command: String,
        /// The trimmed standard error of the process.
        stderr: String,
    },

    /// The pseudo-terminal launcher could not be started.
    #[error("Failed to spawn command {command:?}: {source}")]
    Spawn {
        /// The trimmed command text.
        command: String,
        /// Underlying executor error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ShError {
    /// The command that produced this error.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::CommandFailed { command, .. } | Self::Spawn { command, .. } => command,
        }
    }
}

/// Errors from loading or writing cassette files.
#[derive(Error, Debug)]
pub enum CassetteError {
    /// The cassette file could not be read.
    #[error("Failed to read cassette file {path:?}: {source}")]
    Read {
        /// Cassette path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The cassette file is not valid cassette YAML.
    #[error("Failed to parse cassette file {path:?}: {source}")]
    Parse {
        /// Cassette path.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// The cassette could not be serialized.
    #[error("Failed to serialize cassette: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// A recording adapter still holds the recorder, so it cannot be finished.
    #[error("Cassette recorder is still shared with a recording adapter")]
    Shared,

    /// The cassette file could not be written.
    #[error("Failed to write cassette file {path:?}: {source}")]
    Write {
        /// Cassette path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
