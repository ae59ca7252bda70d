//! Filesystem path helpers.

use crate::error::PathError;
use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::path::Path;

/// Resolve `path` to an absolute path string.
///
/// Relative paths are resolved against the current working directory;
/// the resolution is lexical and does not require the path to exist.
/// An empty path resolves to the working directory itself.
pub fn absolutize(path: &str) -> Result<String> {
    let path = if path.is_empty() { "." } else { path };
    let abs = std::path::absolute(path)
        .with_context(|| format!("failed to resolve {path} against the working directory"))?;
    let abs = Utf8PathBuf::from_path_buf(abs).map_err(PathError::NotUtf8)?;
    Ok(abs.into_string())
}

/// Existence predicate handed to [`crate::store::Store::normalize`].
pub fn exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Check that `path` names an existing directory.
pub fn ensure_directory(path: &str) -> Result<(), PathError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PathError::NotADirectory(path.to_string())),
        Err(source) => Err(PathError::Inaccessible {
            path: path.to_string(),
            source,
        }),
    }
}
