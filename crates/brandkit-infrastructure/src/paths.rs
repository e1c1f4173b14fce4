//! Unified path management for brandkit state files.
//!
//! All persisted client state lives under the platform config directory:
//!
//! ```text
//! ~/.config/brandkit/
//! ├── config.toml          # API base URL, request timeout
//! ├── auth-store.json      # session (tokens, emails)
//! ├── content-store.json   # content card cache
//! ├── logo-store.json      # logo cache
//! ├── color-store.json     # color palette cache
//! └── image-store.json     # uploaded image assets
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for brandkit.
pub struct BrandkitPaths;

impl BrandkitPaths {
    /// Returns the brandkit configuration directory
    /// (e.g. `~/.config/brandkit/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("brandkit"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path of the configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
