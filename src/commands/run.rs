//! `ptysh run` command.

use std::env;
use std::path::Path;

use chrono::Utc;

use super::{print_output, RECORD_ENV};
use crate::runner::CommandRunner;

/// Execute the `run` command.
///
/// When `PTYSH_RECORD` is set to a file path, the interaction is recorded
/// to a cassette at that path.
///
/// # Errors
///
/// Returns an error string if the command fails or the cassette cannot be written.
pub fn run(command: &str, raw: bool) -> Result<(), String> {
    let runner = match env::var_os(RECORD_ENV) {
        Some(path) => {
            let name = format!("ptysh-{}", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
            CommandRunner::recording(Path::new(&path), &name)
        }
        None => CommandRunner::live(),
    };

    // Report the command outcome before any cassette write error.
    let outcome = match runner.run(command) {
        Ok(output) => {
            print_output(&output, raw);
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    };

    match runner.finish() {
        Ok(Some(path)) => eprintln!("Recording saved to: {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            if let Err(command_error) = &outcome {
                eprintln!("{command_error}");
            }
            return Err(e.to_string());
        }
    }

    outcome
}
