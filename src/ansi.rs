//! ANSI escape removal and newline normalisation for captured output.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches terminal escape sequences: OSC-style sequences terminated by BEL
/// and CSI-style sequences with numeric parameters and a final byte.
///
/// Digit classes are spelled `0-9` so matching stays ASCII-only.
pub const ANSI_PATTERN: &str = concat!(
    r"[\x1B\x{9B}][\[\]()#;?]*(?:",
    r"(?:(?:[a-zA-Z0-9]*(?:;[\-a-zA-Z0-9/#&.:=?%@~_]*)*)?\x07)",
    r"|",
    r"(?:(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-PR-TZcf-ntqry=><~])",
    r")",
);

static ANSI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(ANSI_PATTERN).expect("ansi regex"));

/// Removes every ANSI escape sequence from `text`.
///
/// Borrows the input untouched when nothing matches.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_RE.replace_all(text, "")
}

/// Derives the clean form of already-trimmed raw output: escapes removed,
/// then `\r\n` collapsed to `\n`.
#[must_use]
pub fn clean_output(raw: &str) -> String {
    strip_ansi(raw).replace("\r\n", "\n")
}
