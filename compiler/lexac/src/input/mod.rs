//! Source file input.
//!
//! Validates the path before reading so each failure gets its own message.
//! The scanner itself never touches storage.

use std::io;
use std::path::{Path, PathBuf};

use lexa_lexer::MAX_SOURCE_LEN;

/// Why a source file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a regular file", .0.display())]
    NotRegularFile(PathBuf),

    #[error("cannot read '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "'{}' is {len} bytes; at most {} bytes can be scanned",
        .path.display(),
        MAX_SOURCE_LEN
    )]
    TooLarge { path: PathBuf, len: u64 },

    #[error("'{}' contains invalid UTF-8 data", .0.display())]
    InvalidUtf8(PathBuf),
}

/// Read a UTF-8 source file into memory.
///
/// Files longer than [`MAX_SOURCE_LEN`] are rejected before reading, since
/// the scanner could not address all of their bytes.
pub fn read_source(path: &Path) -> Result<String, InputError> {
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    if !metadata.is_file() {
        return Err(InputError::NotRegularFile(path.to_path_buf()));
    }
    let len = metadata.len();
    if !usize::try_from(len).is_ok_and(|len| len <= MAX_SOURCE_LEN) {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
            len,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| InputError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source");
    String::from_utf8(bytes).map_err(|_| InputError::InvalidUtf8(path.to_path_buf()))
}
