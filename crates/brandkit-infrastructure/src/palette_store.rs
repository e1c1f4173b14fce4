//! Color palette store.
//!
//! The palette is a single fixed record per tenant, so this store caches an
//! `Option<ColorPalette>` instead of a collection. Fetch and upsert go
//! through the office-info endpoints; the unauthenticated bypass endpoint
//! serves the default configuration before login.

use crate::state_storage::{JsonStateStorage, StateFile};
use crate::status::StoreStatus;
use brandkit_client::ApiClient;
use brandkit_core::Result;
use brandkit_core::palette::ColorPalette;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

const INFO_PATH: &str = "/api/app/info";
const SAVE_BASIC_PATH: &str = "/api/app/info/save/basic";
const BYPASS_PATH: &str = "/api/app/info/bypass";

pub struct PaletteStore {
    client: Arc<ApiClient>,
    storage: JsonStateStorage,
    palette: RwLock<Option<ColorPalette>>,
    status: StoreStatus,
}

impl PaletteStore {
    pub fn new(client: Arc<ApiClient>, storage: JsonStateStorage) -> Self {
        Self {
            client,
            storage,
            palette: RwLock::new(None),
            status: StoreStatus::default(),
        }
    }

    pub async fn restore(&self) {
        match self.storage.load::<ColorPalette>(StateFile::ColorStore).await {
            Ok(Some(palette)) => *self.palette.write().await = Some(palette),
            Ok(None) => {}
            Err(err) => tracing::warn!("failed to restore palette cache: {err:#}"),
        }
    }

    pub async fn palette(&self) -> Option<ColorPalette> {
        self.palette.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.status.last_error().await
    }

    /// Fetches the tenant's palette and caches it.
    pub async fn fetch(&self, office_code: &str) -> Result<ColorPalette> {
        self.status.begin().await;

        let outcome = self
            .client
            .post(INFO_PATH, &json!({ "officeCode": office_code }))
            .await;

        let result = match outcome.decode::<ColorPalette>() {
            Ok(palette) => {
                *self.palette.write().await = Some(palette.clone());
                self.persist().await;
                Ok(palette)
            }
            Err(err) => Err(err),
        };

        self.status.complete(result).await
    }

    /// Upserts the palette. The cache takes the server's returned record.
    pub async fn save(&self, palette: &ColorPalette) -> Result<ColorPalette> {
        self.status.begin().await;

        let outcome = self.client.post(SAVE_BASIC_PATH, palette).await;

        let result = match outcome.decode::<ColorPalette>() {
            Ok(saved) => {
                *self.palette.write().await = Some(saved.clone());
                self.persist().await;
                Ok(saved)
            }
            Err(err) => Err(err),
        };

        self.status.complete(result).await
    }

    /// Fetches the default configuration without authentication. Does not
    /// touch the cached tenant palette.
    pub async fn fetch_default(&self) -> Result<ColorPalette> {
        self.status.begin().await;
        let result = self.client.post(BYPASS_PATH, &json!({})).await.decode();
        self.status.complete(result).await
    }

    async fn persist(&self) {
        let palette = self.palette.read().await.clone();
        if let Some(palette) = palette
            && let Err(err) = self.storage.save(StateFile::ColorStore, &palette).await
        {
            tracing::warn!("failed to persist palette cache: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use tempfile::TempDir;

    fn palette_body() -> String {
        serde_json::to_string(&serde_json::json!({
            "success": true,
            "message": "ok",
            "data": ColorPalette::default_for("ktds"),
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn fetch_caches_and_persists_palette() {
        let temp_dir = TempDir::new().unwrap();
        let harness = Harness::replying(temp_dir.path(), vec![(200, palette_body())]).await;
        let store = PaletteStore::new(harness.client.clone(), harness.storage.clone());

        let palette = store.fetch("ktds").await.unwrap();
        assert_eq!(palette.office_code, "ktds");
        assert_eq!(store.palette().await, Some(palette));

        // A fresh store restores the persisted record.
        let second = PaletteStore::new(harness.client.clone(), harness.storage.clone());
        second.restore().await;
        assert!(second.palette().await.is_some());
    }

    #[tokio::test]
    async fn save_takes_server_record() {
        let temp_dir = TempDir::new().unwrap();
        let mut returned = ColorPalette::default_for("ktds");
        returned.primary_color = "#000000".to_string();
        let body = serde_json::to_string(&serde_json::json!({ "data": returned })).unwrap();

        let harness = Harness::replying(temp_dir.path(), vec![(200, body)]).await;
        let store = PaletteStore::new(harness.client.clone(), harness.storage.clone());

        let saved = store.save(&ColorPalette::default_for("ktds")).await.unwrap();
        assert_eq!(saved.primary_color, "#000000");
        assert_eq!(store.palette().await.unwrap().primary_color, "#000000");
    }

    #[tokio::test]
    async fn fetch_default_does_not_cache() {
        let temp_dir = TempDir::new().unwrap();
        let harness = Harness::replying(temp_dir.path(), vec![(200, palette_body())]).await;
        let store = PaletteStore::new(harness.client.clone(), harness.storage.clone());

        let palette = store.fetch_default().await.unwrap();
        assert_eq!(palette.office_code, "ktds");
        assert_eq!(store.palette().await, None);
    }

    #[tokio::test]
    async fn failure_records_error() {
        let temp_dir = TempDir::new().unwrap();
        let harness = Harness::replying(
            temp_dir.path(),
            vec![(404, r#"{"message":"no office"}"#.to_string())],
        )
        .await;
        let store = PaletteStore::new(harness.client.clone(), harness.storage.clone());

        let err = store.fetch("nope").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(store.last_error().await.is_some());
        assert!(!store.is_loading());
    }
}
