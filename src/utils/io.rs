//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Read a file as text, distinguishing "not text" from I/O failure.
///
/// Returns `Ok(None)` when the file is missing or is not valid UTF-8.
pub fn read_text(path: &Path, operation: &str) -> Result<Option<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::internal_io(e.to_string(), Some(operation.to_string()))),
    };

    Ok(String::from_utf8(bytes).ok())
}

/// Write content to file with standardized error handling.
///
/// Wraps `fs::write` with consistent `Error::internal_io` formatting.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Move a file, with standardized error handling.
pub fn rename_file(from: &Path, to: &Path, operation: &str) -> Result<()> {
    fs::rename(from, to)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}
