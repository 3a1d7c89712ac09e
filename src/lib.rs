//! Run shell commands inside a pseudo-terminal and get their output back as
//! clean text.
//!
//! ```no_run
//! let branch = ptysh::sh!("git rev-parse --abbrev-ref HEAD")?;
//! println!("on {branch}");
//!
//! let listing = ptysh::sh("ls --color=always")?;
//! assert!(!listing.contains('\x1b'));
//! assert!(listing.raw().len() >= listing.len());
//! # Ok::<(), ptysh::ShError>(())
//! ```

pub mod adapters;
pub mod ansi;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod ports;
pub mod runner;

use clap::Parser;

pub use error::{CassetteError, ShError};
pub use output::ShOutput;
pub use runner::CommandRunner;

/// Runs `command` through `/usr/bin/script` and returns its cleaned output.
///
/// The command is trimmed and passed to the shell as is. Nothing is quoted
/// or escaped, so callers are responsible for anything they splice in.
///
/// # Errors
///
/// Returns [`ShError::CommandFailed`] when the process exits unsuccessfully
/// and [`ShError::Spawn`] when `script` cannot be started.
pub fn sh(command: &str) -> Result<ShOutput, ShError> {
    CommandRunner::live().run(command)
}

/// Builds a command with `format!` syntax and runs it with [`sh`].
///
/// Interpolated values are inserted verbatim. Use a raw string literal
/// (`sh!(r"...")`) to keep backslashes in the command text uninterpreted.
///
/// ```no_run
/// let dir = "/tmp";
/// let count = ptysh::sh!("ls {dir} | wc -l")?;
/// # Ok::<(), ptysh::ShError>(())
/// ```
#[macro_export]
macro_rules! sh {
    ($($arg:tt)*) => {
        $crate::sh(&::std::format!($($arg)*))
    };
}

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::init_tracing(cli.debug);
    commands::dispatch(&cli.command)
}
