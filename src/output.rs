//! The value returned by a successful command.

use std::fmt;
use std::ops::Deref;

use crate::ansi::clean_output;

/// Cleaned standard output of a command, with the raw capture attached.
///
/// Derefs to the cleaned text, so it can be used wherever a `&str` is
/// expected. The raw text (trimmed, but with escape codes and `\r\n`
/// intact) is available through [`ShOutput::raw`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShOutput {
    clean: String,
    raw: String,
}

impl ShOutput {
    /// Builds an output from raw captured text, deriving the clean form.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let clean = clean_output(&raw);
        Self { clean, raw }
    }

    /// The cleaned text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.clean
    }

    /// The trimmed output before escape removal and newline normalisation.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Consumes the output, returning the cleaned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.clean
    }

    /// Consumes the output, returning `(clean, raw)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.clean, self.raw)
    }
}

impl Deref for ShOutput {
    type Target = str;

    fn deref(&self) -> &str {
        &self.clean
    }
}

impl AsRef<str> for ShOutput {
    fn as_ref(&self) -> &str {
        &self.clean
    }
}

impl fmt::Display for ShOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clean)
    }
}

impl From<ShOutput> for String {
    fn from(output: ShOutput) -> Self {
        output.clean
    }
}

impl PartialEq<str> for ShOutput {
    fn eq(&self, other: &str) -> bool {
        self.clean == other
    }
}

impl PartialEq<&str> for ShOutput {
    fn eq(&self, other: &&str) -> bool {
        self.clean == *other
    }
}

impl PartialEq<String> for ShOutput {
    fn eq(&self, other: &String) -> bool {
        &self.clean == other
    }
}

impl PartialEq<ShOutput> for str {
    fn eq(&self, other: &ShOutput) -> bool {
        self == other.clean
    }
}

impl PartialEq<ShOutput> for &str {
    fn eq(&self, other: &ShOutput) -> bool {
        *self == other.clean
    }
}
