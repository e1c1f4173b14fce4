//! Configuration service.
//!
//! Loads the client configuration from `~/.config/brandkit/config.toml`
//! and caches it to avoid repeated file I/O. Environment variables
//! override the file:
//!
//! - `BRANDKIT_API_BASE_URL`
//! - `BRANDKIT_REQUEST_TIMEOUT_SECS`

use crate::paths::BrandkitPaths;
use brandkit_core::config::ClientConfig;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<ClientConfig>>>,
    /// Explicit file path; None means the default location.
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a service reading from the default location. The
    /// configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: None,
        }
    }

    /// Creates a service reading from an explicit file (tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: Some(path.into()),
        }
    }

    /// Gets the configuration, loading from file if not cached. A missing
    /// or unreadable file yields the defaults.
    pub fn get_config(&self) -> ClientConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = apply_env_overrides(self.load_from_file().unwrap_or_default());

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_from_file(&self) -> Option<ClientConfig> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => BrandkitPaths::config_file().ok()?,
        };

        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read config file {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("failed to parse config file {:?}: {}", path, err);
                None
            }
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_env_overrides(mut config: ClientConfig) -> ClientConfig {
    if let Ok(base_url) = std::env::var("BRANDKIT_API_BASE_URL")
        && !base_url.is_empty()
    {
        config.api_base_url = base_url;
    }
    if let Ok(timeout) = std::env::var("BRANDKIT_REQUEST_TIMEOUT_SECS")
        && let Ok(seconds) = timeout.parse()
    {
        config.request_timeout_secs = seconds;
    }
    config
}
