//! Content card store.
//!
//! Caches the tenant's content cards, mirrors every server mutation into
//! the cache after the call succeeds, and persists the cache to
//! `content-store.json` for reload resilience. The cache is owned
//! exclusively by this store; nothing else mutates it.

use crate::state_storage::{JsonStateStorage, StateFile};
use crate::status::StoreStatus;
use brandkit_client::ApiClient;
use brandkit_core::Result;
use brandkit_core::card::{Card, CardInput};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

const LIST_PATH: &str = "/api/app/info/card/list";
const ADD_PATH: &str = "/api/app/info/card/add";
const UPDATE_PATH: &str = "/api/app/info/card/update";
const DELETE_PATH: &str = "/api/app/info/card/delete";
const ORDER_PATH: &str = "/api/app/info/card/order";

pub struct CardStore {
    client: Arc<ApiClient>,
    storage: JsonStateStorage,
    items: RwLock<Vec<Card>>,
    status: StoreStatus,
}

impl CardStore {
    pub fn new(client: Arc<ApiClient>, storage: JsonStateStorage) -> Self {
        Self {
            client,
            storage,
            items: RwLock::new(Vec::new()),
            status: StoreStatus::default(),
        }
    }

    /// Restores the persisted cache, if any. Called once at startup.
    pub async fn restore(&self) {
        match self.storage.load::<Vec<Card>>(StateFile::ContentStore).await {
            Ok(Some(cards)) => *self.items.write().await = cards,
            Ok(None) => {}
            Err(err) => tracing::warn!("failed to restore card cache: {err:#}"),
        }
    }

    pub async fn items(&self) -> Vec<Card> {
        self.items.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.status.last_error().await
    }

    /// Replaces the cache wholesale with the server's list.
    pub async fn fetch_list(&self, office_code: &str) -> Result<Vec<Card>> {
        self.status.begin().await;

        let outcome = self
            .client
            .post(LIST_PATH, &json!({ "officeCode": office_code }))
            .await;

        let result = match outcome.decode::<Vec<Card>>() {
            Ok(cards) => {
                *self.items.write().await = cards.clone();
                self.persist().await;
                Ok(cards)
            }
            Err(err) => Err(err),
        };

        self.status.complete(result).await
    }

    /// Creates a card and appends the server's entity to the cache. The
    /// append happens after the call confirms, never optimistically before.
    pub async fn create(&self, input: &CardInput, office_code: &str) -> Result<Card> {
        self.status.begin().await;

        let result = async {
            let mut body = serde_json::to_value(input)?;
            body["officeCode"] = json!(office_code);

            let card: Card = self.client.post(ADD_PATH, &body).await.decode()?;
            self.items.write().await.push(card.clone());
            self.persist().await;
            Ok(card)
        }
        .await;

        self.status.complete(result).await
    }

    /// Updates a card and replaces the cached entity by id. An entity the
    /// cache does not hold is dropped silently, not inserted.
    pub async fn update(&self, id: &str, office_code: &str, patch: &CardInput) -> Result<Card> {
        self.status.begin().await;

        let result = async {
            let mut body = serde_json::to_value(patch)?;
            body["id"] = json!(id);
            body["officeCode"] = json!(office_code);

            let card: Card = self.client.post(UPDATE_PATH, &body).await.decode()?;

            let mut items = self.items.write().await;
            match items.iter().position(|item| item.id == id) {
                Some(index) => items[index] = card.clone(),
                None => tracing::debug!(id, "updated card not cached, dropped"),
            }
            drop(items);

            self.persist().await;
            Ok(card)
        }
        .await;

        self.status.complete(result).await
    }

    /// Deletes a card and removes it from the cache by id.
    pub async fn delete(&self, id: &str, office_code: &str) -> Result<()> {
        self.status.begin().await;

        let result = async {
            self.client
                .post(DELETE_PATH, &json!({ "id": id, "officeCode": office_code }))
                .await
                .ok()?;

            self.items.write().await.retain(|item| item.id != id);
            self.persist().await;
            Ok(())
        }
        .await;

        self.status.complete(result).await
    }

    /// Reorders the tenant's cards. On success each cached card's
    /// `display_order` becomes its index in the given id list.
    pub async fn reorder(&self, ids: &[String], office_code: &str) -> Result<()> {
        self.status.begin().await;

        let result = async {
            self.client
                .post(
                    ORDER_PATH,
                    &json!({ "officeCode": office_code, "cardIds": ids }),
                )
                .await
                .ok()?;

            let mut items = self.items.write().await;
            for item in items.iter_mut() {
                if let Some(index) = ids.iter().position(|id| *id == item.id) {
                    item.display_order = index as u32;
                }
            }
            drop(items);

            self.persist().await;
            Ok(())
        }
        .await;

        self.status.complete(result).await
    }

    async fn persist(&self) {
        let items = self.items.read().await.clone();
        if let Err(err) = self.storage.save(StateFile::ContentStore, &items).await {
            tracing::warn!("failed to persist card cache: {err:#}");
        }
    }
}
