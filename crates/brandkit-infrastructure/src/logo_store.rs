//! Logo store.
//!
//! Same cache discipline as the card store, plus the single-selection
//! invariant: the server keeps at most one logo selected per tenant, and
//! after a successful select call the local cache mirrors that by marking
//! exactly the chosen logo.

use crate::state_storage::{JsonStateStorage, StateFile};
use crate::status::StoreStatus;
use brandkit_client::ApiClient;
use brandkit_core::Result;
use brandkit_core::logo::{Logo, LogoInput};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

const LIST_PATH: &str = "/api/app/info/logo/list";
const ADD_PATH: &str = "/api/app/info/logo/add";
const SELECT_PATH: &str = "/api/app/info/logo/select";
const DELETE_PATH: &str = "/api/app/info/logo/delete";

pub struct LogoStore {
    client: Arc<ApiClient>,
    storage: JsonStateStorage,
    items: RwLock<Vec<Logo>>,
    status: StoreStatus,
}

impl LogoStore {
    pub fn new(client: Arc<ApiClient>, storage: JsonStateStorage) -> Self {
        Self {
            client,
            storage,
            items: RwLock::new(Vec::new()),
            status: StoreStatus::default(),
        }
    }

    pub async fn restore(&self) {
        match self.storage.load::<Vec<Logo>>(StateFile::LogoStore).await {
            Ok(Some(logos)) => *self.items.write().await = logos,
            Ok(None) => {}
            Err(err) => tracing::warn!("failed to restore logo cache: {err:#}"),
        }
    }

    pub async fn items(&self) -> Vec<Logo> {
        self.items.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.status.last_error().await
    }

    /// The currently selected logo, if the cache holds one.
    pub async fn selected(&self) -> Option<Logo> {
        self.items
            .read()
            .await
            .iter()
            .find(|logo| logo.is_selected)
            .cloned()
    }

    pub async fn fetch_list(&self, office_code: &str) -> Result<Vec<Logo>> {
        self.status.begin().await;

        let outcome = self
            .client
            .post(LIST_PATH, &json!({ "officeCode": office_code }))
            .await;

        let result = match outcome.decode::<Vec<Logo>>() {
            Ok(logos) => {
                *self.items.write().await = logos.clone();
                self.persist().await;
                Ok(logos)
            }
            Err(err) => Err(err),
        };

        self.status.complete(result).await
    }

    pub async fn create(&self, input: &LogoInput, office_code: &str) -> Result<Logo> {
        self.status.begin().await;

        let result = async {
            let mut body = serde_json::to_value(input)?;
            body["officeCode"] = json!(office_code);

            let logo: Logo = self.client.post(ADD_PATH, &body).await.decode()?;
            self.items.write().await.push(logo.clone());
            self.persist().await;
            Ok(logo)
        }
        .await;

        self.status.complete(result).await
    }

    /// Selects a logo. After the server confirms, exactly the chosen logo
    /// is marked selected in the cache and all others are deselected.
    pub async fn select(&self, id: &str, office_code: &str) -> Result<()> {
        self.status.begin().await;

        let result = async {
            self.client
                .post(SELECT_PATH, &json!({ "id": id, "officeCode": office_code }))
                .await
                .ok()?;

            let mut items = self.items.write().await;
            for logo in items.iter_mut() {
                logo.is_selected = logo.id == id;
            }
            drop(items);

            self.persist().await;
            Ok(())
        }
        .await;

        self.status.complete(result).await
    }

    pub async fn delete(&self, id: &str, office_code: &str) -> Result<()> {
        self.status.begin().await;

        let result = async {
            self.client
                .post(DELETE_PATH, &json!({ "id": id, "officeCode": office_code }))
                .await
                .ok()?;

            self.items.write().await.retain(|logo| logo.id != id);
            self.persist().await;
            Ok(())
        }
        .await;

        self.status.complete(result).await
    }

    async fn persist(&self) {
        let items = self.items.read().await.clone();
        if let Err(err) = self.storage.save(StateFile::LogoStore, &items).await {
            tracing::warn!("failed to persist logo cache: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Harness, logo_json};
    use tempfile::TempDir;

    fn store(harness: &Harness) -> LogoStore {
        LogoStore::new(harness.client.clone(), harness.storage.clone())
    }

    #[tokio::test]
    async fn select_marks_exactly_one_logo() {
        let temp_dir = TempDir::new().unwrap();
        let harness = Harness::replying(
            temp_dir.path(),
            vec![
                (
                    200,
                    format!(
                        r#"{{"data":[{},{},{}]}}"#,
                        logo_json("l1", true),
                        logo_json("l2", false),
                        logo_json("l3", false)
                    ),
                ),
                (200, r#"{"success":true,"message":"ok","data":null}"#.to_string()),
            ],
        )
        .await;
        let store = store(&harness);

        store.fetch_list("ktds").await.unwrap();
        store.select("l3", "ktds").await.unwrap();

        let items = store.items().await;
        let selected: Vec<&str> = items
            .iter()
            .filter(|logo| logo.is_selected)
            .map(|logo| logo.id.as_str())
            .collect();
        assert_eq!(selected, vec!["l3"]);
        assert_eq!(store.selected().await.unwrap().id, "l3");
    }

    #[tokio::test]
    async fn failed_select_leaves_cache_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let harness = Harness::replying(
            temp_dir.path(),
            vec![
                (200, format!(r#"{{"data":[{}]}}"#, logo_json("l1", true))),
                (500, r#"{"message":"boom"}"#.to_string()),
            ],
        )
        .await;
        let store = store(&harness);

        store.fetch_list("ktds").await.unwrap();
        let err = store.select("l1", "ktds").await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert!(store.items().await[0].is_selected);
        assert!(store.last_error().await.is_some());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn delete_removes_logo() {
        let temp_dir = TempDir::new().unwrap();
        let harness = Harness::replying(
            temp_dir.path(),
            vec![
                (
                    200,
                    format!(
                        r#"{{"data":[{},{}]}}"#,
                        logo_json("l1", false),
                        logo_json("l2", true)
                    ),
                ),
                (200, r#"{"success":true,"message":"ok","data":null}"#.to_string()),
            ],
        )
        .await;
        let store = store(&harness);

        store.fetch_list("ktds").await.unwrap();
        store.delete("l1", "ktds").await.unwrap();

        let items = store.items().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "l2");
    }

    #[tokio::test]
    async fn create_appends_registered_logo() {
        let temp_dir = TempDir::new().unwrap();
        let harness = Harness::replying(
            temp_dir.path(),
            vec![(200, logo_json("l9", false).to_string())],
        )
        .await;
        let store = store(&harness);

        let input = LogoInput {
            name: Some("main".to_string()),
            image_url: "https://cdn.example.com/l9.png".to_string(),
        };
        let logo = store.create(&input, "ktds").await.unwrap();

        assert_eq!(logo.id, "l9");
        assert_eq!(store.items().await.len(), 1);
    }
}
