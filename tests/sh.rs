//! Live end-to-end tests through `/usr/bin/script`.
//!
//! Each test returns early when the host cannot give `script` a
//! pseudo-terminal (missing binary, no `/dev/ptmx`, non-Linux `script`).

use ptysh::adapters::live::LiveShellExecutor;
use ptysh::ports::ShellExecutor;
use ptysh::sh;

fn pty_available() -> bool {
    LiveShellExecutor
        .run("echo probe")
        .is_ok_and(|out| out.success && out.stdout.contains("probe"))
}

#[test]
fn echo_hello() {
    if !pty_available() {
        return;
    }
    let out = sh("echo hello").unwrap();
    assert_eq!(out, "hello");
    assert_eq!(out.raw(), "hello");
}

#[test]
fn coloured_output_is_stripped() {
    if !pty_available() {
        return;
    }
    let out = sh(r"printf '\033[31mred\033[0m'").unwrap();
    assert_eq!(out, "red");
    assert_eq!(out.raw(), "\x1b[31mred\x1b[0m");
}

#[test]
fn terminal_newlines_are_normalised() {
    if !pty_available() {
        return;
    }
    let out = sh(r"printf 'a\nb'").unwrap();
    assert_eq!(out, "a\nb");
    assert_eq!(out.raw(), "a\r\nb");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    if !pty_available() {
        return;
    }
    let out = sh("   printf '\\n\\n  padded  \\n\\n'   ").unwrap();
    assert_eq!(out, "padded");
}

#[test]
fn macro_inserts_values_verbatim() {
    if !pty_available() {
        return;
    }
    let word = "two words";
    let out = ptysh::sh!("echo {word}").unwrap();
    assert_eq!(out, "two words");
}
