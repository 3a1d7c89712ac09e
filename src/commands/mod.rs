//! Command dispatch and handlers.

pub mod replay;
pub mod run;

use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use crate::output::ShOutput;

/// Environment variable naming a cassette file to record `run` into.
pub const RECORD_ENV: &str = "PTYSH_RECORD";

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Run { raw, command } => run::run(&command.join(" "), *raw),
        Command::Replay { cassette, raw, command } => {
            replay::run(cassette, &command.join(" "), *raw)
        }
    }
}

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `debug` when `debug` is set and `warn` otherwise. A
/// subscriber that is already installed is left in place.
pub fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .compact()
        .try_init();
}

/// Print the clean or raw form of `output` to stdout.
fn print_output(output: &ShOutput, raw: bool) {
    if raw {
        println!("{}", output.raw());
    } else {
        println!("{output}");
    }
}
