//! Scratch directories holding request fixtures and option files.

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

/// Temporary directory removed on drop.
#[derive(Debug)]
pub struct FixtureDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl FixtureDir {
    /// Create an empty scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create fixture directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("non UTF-8 temp path: {}", path.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Directory root.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `name` under the root and return the full path.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.root.join(name);
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Serialise `value` as JSON into `name`.
    ///
    /// # Errors
    ///
    /// Returns an error when serialisation or the write fails.
    pub fn write_json(&self, name: &str, value: &Value) -> Result<Utf8PathBuf> {
        let text = serde_json::to_string_pretty(value).context("serialise fixture")?;
        self.write(name, &text)
    }
}
