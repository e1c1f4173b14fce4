//! Durable JSON state storage.
//!
//! Each store persists to its own namespaced file under the brandkit config
//! directory. Persistence timing is explicit: stores call `save` after each
//! mutating operation and `load` at startup, nothing happens implicitly.

use crate::paths::BrandkitPaths;
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The persisted state files, one per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFile {
    AuthStore,
    ContentStore,
    LogoStore,
    ColorStore,
    ImageStore,
}

impl StateFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            StateFile::AuthStore => "auth-store.json",
            StateFile::ContentStore => "content-store.json",
            StateFile::LogoStore => "logo-store.json",
            StateFile::ColorStore => "color-store.json",
            StateFile::ImageStore => "image-store.json",
        }
    }
}

/// File-backed JSON storage rooted at a base directory.
#[derive(Debug, Clone)]
pub struct JsonStateStorage {
    base_dir: PathBuf,
}

impl JsonStateStorage {
    /// Creates a storage rooted at an explicit directory (tests point this
    /// at a temp dir).
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Creates a storage at the default location (`~/.config/brandkit`).
    pub fn default_location() -> Result<Self> {
        let base_dir = BrandkitPaths::config_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get config directory: {}", e))?;
        Ok(Self::new(base_dir))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_of(&self, file: StateFile) -> PathBuf {
        self.base_dir.join(file.file_name())
    }

    /// Loads a state file. A missing file is `Ok(None)`, not an error.
    pub async fn load<T: DeserializeOwned>(&self, file: StateFile) -> Result<Option<T>> {
        let path = self.path_of(file);

        if !fs::try_exists(&path).await? {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read state file {:?}", path))?;

        let value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse state file {:?}", path))?;

        Ok(Some(value))
    }

    /// Saves a state file, creating the base directory if needed.
    pub async fn save<T: Serialize>(&self, file: StateFile, value: &T) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .context("Failed to create state directory")?;

        let path = self.path_of(file);
        let content =
            serde_json::to_string_pretty(value).context("Failed to serialize state")?;

        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write state file {:?}", path))?;

        Ok(())
    }

    /// Removes a state file if present.
    pub async fn clear(&self, file: StateFile) -> Result<()> {
        let path = self.path_of(file);
        if fs::try_exists(&path).await? {
            fs::remove_file(&path)
                .await
                .with_context(|| format!("Failed to remove state file {:?}", path))?;
        }
        Ok(())
    }
}
