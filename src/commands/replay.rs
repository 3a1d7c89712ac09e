//! `ptysh replay` command.

use std::path::Path;

use super::print_output;
use crate::runner::CommandRunner;

/// Execute the `replay` command against a cassette file.
///
/// # Errors
///
/// Returns an error string if the cassette cannot be loaded or the
/// recorded command failed.
pub fn run(cassette: &Path, command: &str, raw: bool) -> Result<(), String> {
    let runner = CommandRunner::replaying(cassette).map_err(|e| e.to_string())?;
    let output = runner.run(command).map_err(|e| e.to_string())?;
    print_output(&output, raw);
    Ok(())
}
