//! JSON data file storage for the entry store.

use crate::store::{Entry, Store};
use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// On-disk location of the tracked-directory list.
///
/// The whole file is replaced on every save; there is no incremental
/// writing, so a failed run never leaves a half-written store behind.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: Utf8PathBuf,
}

impl DataFile {
    /// Create a handle for an explicit data file path.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a handle at the default location.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Resolve the default data file location.
    ///
    /// Priority:
    /// 1. HOP_DATA_FILE environment variable (if set)
    /// 2. <config dir>/hop/data.json (~/.config/hop/data.json on Linux)
    pub fn default_path() -> Result<Utf8PathBuf> {
        if let Ok(custom) = std::env::var("HOP_DATA_FILE") {
            return Ok(Utf8PathBuf::from(custom));
        }

        let config = dirs::config_dir()
            .context("could not determine the user configuration directory")?;
        let config = Utf8PathBuf::from_path_buf(config)
            .map_err(|p| anyhow!("configuration directory is not valid UTF-8: {}", p.display()))?;
        Ok(config.join("hop").join("data.json"))
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Ensure the data file's directory exists.
    fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {parent}"))?;
        }
        Ok(())
    }

    /// Load the store from disk.
    ///
    /// A missing file means a first run and yields an empty store; any
    /// other read failure, and a decode failure on a non-empty file, is
    /// an error (malformed data is never silently discarded).
    pub fn load(&self) -> Result<Store> {
        if !self.path.exists() {
            return Ok(Store::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read data file: {}", self.path))?;
        let entries: Vec<Entry> = serde_json::from_str(&raw)
            .with_context(|| format!("malformed data file: {}", self.path))?;
        Ok(Store::new(entries))
    }

    /// Write the whole store as indented JSON, for human readability.
    pub fn save(&self, store: &Store) -> Result<()> {
        self.ensure_dir()?;

        let json = serde_json::to_string_pretty(store.entries())?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write data file: {}", self.path))?;
        Ok(())
    }
}
