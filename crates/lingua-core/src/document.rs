//! Reading TOML documents from disk.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{LinguaError, Result};

/// Read and parse a TOML document into a table.
///
/// A missing file is reported as [`LinguaError::FileNotFound`] so callers can
/// tell it apart from unreadable or malformed files.
pub fn read_table(path: &Path) -> Result<toml::Table> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LinguaError::FileNotFound(path.to_path_buf()),
        _ => LinguaError::Io(e),
    })?;
    let table = content
        .parse::<toml::Table>()
        .map_err(|source| LinguaError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("loaded {} ({} top-level keys)", path.display(), table.len());
    Ok(table)
}
