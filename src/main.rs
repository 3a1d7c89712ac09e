//! Binary entrypoint for the `ptysh` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Recording is handled in commands::run via PTYSH_RECORD=<path>.
    match ptysh::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
