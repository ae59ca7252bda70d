//! Error types for path validation.

use std::path::PathBuf;
use thiserror::Error;

/// User-input path failures. These abandon the current command but are
/// not fatal to the invocation; the store is still persisted.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("cannot access {path}: {source}")]
    Inaccessible {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("path is not valid UTF-8: {}", .0.display())]
    NotUtf8(PathBuf),
}
