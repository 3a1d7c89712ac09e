//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `ptysh`.
#[derive(Debug, Parser)]
#[command(name = "ptysh", version, about = "Run shell commands in a pseudo-terminal")]
pub struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, global = true)]
    pub debug: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a command and print its cleaned output.
    Run {
        /// Print the raw output, escape codes and `\r\n` included.
        #[arg(long)]
        raw: bool,
        /// Command words, joined with spaces.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Serve a command's output from a recorded cassette.
    ///
    /// The command words must match the next recorded command exactly;
    /// an exhausted or mismatched cassette is an error.
    Replay {
        /// Cassette file written by an earlier `PTYSH_RECORD` run.
        #[arg(long)]
        cassette: PathBuf,
        /// Print the raw output, escape codes and `\r\n` included.
        #[arg(long)]
        raw: bool,
        /// Command words, joined with spaces.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_run_subcommand() {
        let cli = Cli::parse_from(["ptysh", "run", "ls", "-la"]);
        match cli.command {
            Command::Run { raw, command } => {
                assert!(!raw);
                assert_eq!(command, ["ls", "-la"]);
            }
            Command::Replay { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn parses_raw_flag_before_command() {
        let cli = Cli::parse_from(["ptysh", "run", "--raw", "echo", "--raw"]);
        assert!(matches!(cli.command, Command::Run { raw: true, ref command } if command == &["echo", "--raw"]));
    }

    #[test]
    fn parses_replay_subcommand() {
        let cli = Cli::parse_from(["ptysh", "--debug", "replay", "--cassette", "c.yaml", "exit", "1"]);
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Replay { ref cassette, .. } if cassette.ends_with("c.yaml")));
    }

    #[test]
    fn run_requires_command_words() {
        assert!(Cli::try_parse_from(["ptysh", "run"]).is_err());
    }
}
