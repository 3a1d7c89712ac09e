//! Cassette format for recording and replaying interactions.

pub mod format;
pub mod recorder;
pub mod replayer;

use std::path::Path;

use crate::error::CassetteError;
use format::Cassette;

/// Reads and parses a YAML cassette file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Cassette, CassetteError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| CassetteError::Read { path: path.to_path_buf(), source })?;
    serde_yaml::from_str(&content)
        .map_err(|source| CassetteError::Parse { path: path.to_path_buf(), source })
}
