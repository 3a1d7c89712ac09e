//! Replaying adapter for the `ShellExecutor` port.

use std::sync::{Mutex, PoisonError};

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Replays recorded shell command results from a cassette.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = {
            let mut replayer = self.replayer.lock().unwrap_or_else(PoisonError::into_inner);
            replayer.try_next_interaction("shell", "run")?
        };
        if let Some(recorded) = interaction.input.get("command").and_then(serde_json::Value::as_str) {
            if recorded != command {
                return Err(format!(
                    "Cassette mismatch: interaction seq={} recorded {recorded:?}",
                    interaction.seq
                )
                .into());
            }
        }
        let mut output = interaction.output;
        if let Some(err) = output.get("err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        let value = if output.get("ok").is_some() { output["ok"].take() } else { output };
        let shell_output: ShellOutput = serde_json::from_value(value)?;
        Ok(shell_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn replaying_shell_run() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"command": "echo hello"}),
            output: json!({"ok": {"success": true, "exit_code": 0, "stdout": "hello\r\n", "stderr": ""}}),
        }]);
        let shell = ReplayingShellExecutor::new(replayer);
        let result = shell.run("echo hello").unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout, "hello\r\n");
    }

    #[test]
    fn replaying_shell_run_without_exit_code() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"command": "kill -9 $$"}),
            output: json!({"ok": {"success": false, "stdout": "", "stderr": ""}}),
        }]);
        let shell = ReplayingShellExecutor::new(replayer);
        let result = shell.run("kill -9 $$").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
    }

    #[test]
    fn replaying_shell_run_error() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"command": "bad_cmd"}),
            output: json!({"err": "command not found"}),
        }]);
        let shell = ReplayingShellExecutor::new(replayer);
        let result = shell.run("bad_cmd");
        assert_eq!(result.unwrap_err().to_string(), "command not found");
    }

    #[test]
    fn exhausted_cassette_is_an_error() {
        let shell = ReplayingShellExecutor::new(make_replayer(vec![]));
        let err = shell.run("echo hi").unwrap_err();
        assert!(err.to_string().contains("Cassette exhausted"));
    }

    #[test]
    fn different_command_is_an_error() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"command": "echo recorded"}),
            output: json!({"ok": {"success": true, "exit_code": 0, "stdout": "recorded", "stderr": ""}}),
        }]);
        let shell = ReplayingShellExecutor::new(replayer);
        let err = shell.run("echo other").unwrap_err();
        assert_eq!(err.to_string(), "Cassette mismatch: interaction seq=0 recorded \"echo recorded\"");
    }

    #[test]
    fn malformed_output_is_an_error() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"command": "echo"}),
            output: json!({"ok": {"stdout": 42}}),
        }]);
        let shell = ReplayingShellExecutor::new(replayer);
        assert!(shell.run("echo").is_err());
    }
}
