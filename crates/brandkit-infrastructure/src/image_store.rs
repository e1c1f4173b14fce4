//! Uploaded image store.
//!
//! Wraps the image endpoints: listing, single and batch multipart uploads,
//! and deletion. Keeps the office's uploaded assets cached and exposes the
//! file-name → URL map the branding forms consume.

use crate::state_storage::{JsonStateStorage, StateFile};
use crate::status::StoreStatus;
use brandkit_client::{ApiClient, MultipartPayload};
use brandkit_core::Result;
use brandkit_core::image::UploadedImage;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

const LIST_PATH: &str = "/api/app/info/image";
const UPLOAD_PATH: &str = "/api/app/info/image/upload";
const UPLOAD_BATCH_PATH: &str = "/api/app/info/image/upload/batch";
const DELETE_PATH: &str = "/api/app/info/image/delete";

pub struct ImageStore {
    client: Arc<ApiClient>,
    storage: JsonStateStorage,
    items: RwLock<Vec<UploadedImage>>,
    status: StoreStatus,
}

impl ImageStore {
    pub fn new(client: Arc<ApiClient>, storage: JsonStateStorage) -> Self {
        Self {
            client,
            storage,
            items: RwLock::new(Vec::new()),
            status: StoreStatus::default(),
        }
    }

    pub async fn restore(&self) {
        match self
            .storage
            .load::<Vec<UploadedImage>>(StateFile::ImageStore)
            .await
        {
            Ok(Some(images)) => *self.items.write().await = images,
            Ok(None) => {}
            Err(err) => tracing::warn!("failed to restore image cache: {err:#}"),
        }
    }

    pub async fn items(&self) -> Vec<UploadedImage> {
        self.items.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.status.last_error().await
    }

    /// File-name → URL map of the cached uploads.
    pub async fn url_map(&self) -> HashMap<String, String> {
        self.items
            .read()
            .await
            .iter()
            .map(|image| (image.file_name.clone(), image.url.clone()))
            .collect()
    }

    pub async fn fetch_list(&self, office_code: &str) -> Result<Vec<UploadedImage>> {
        self.status.begin().await;

        let outcome = self
            .client
            .post(LIST_PATH, &json!({ "officeCode": office_code }))
            .await;

        let result = match outcome.decode::<Vec<UploadedImage>>() {
            Ok(images) => {
                *self.items.write().await = images.clone();
                self.persist().await;
                Ok(images)
            }
            Err(err) => Err(err),
        };

        self.status.complete(result).await
    }

    /// Uploads one file as multipart form data and appends the stored
    /// asset to the cache.
    pub async fn upload(
        &self,
        office_code: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage> {
        self.status.begin().await;

        let payload = MultipartPayload::default()
            .field("officeCode", office_code)
            .file("file", file_name, bytes);

        let result = match self
            .client
            .post_form_data(UPLOAD_PATH, payload)
            .await
            .decode::<UploadedImage>()
        {
            Ok(image) => {
                self.items.write().await.push(image.clone());
                self.persist().await;
                Ok(image)
            }
            Err(err) => Err(err),
        };

        self.status.complete(result).await
    }

    /// Uploads several files in one call.
    pub async fn upload_batch(
        &self,
        office_code: &str,
        files: Vec<(String, Vec<u8>)>,
    ) -> Result<Vec<UploadedImage>> {
        self.status.begin().await;

        let mut payload = MultipartPayload::default().field("officeCode", office_code);
        for (file_name, bytes) in files {
            payload = payload.file("files", file_name, bytes);
        }

        let result = match self
            .client
            .post_form_data(UPLOAD_BATCH_PATH, payload)
            .await
            .decode::<Vec<UploadedImage>>()
        {
            Ok(images) => {
                self.items.write().await.extend(images.clone());
                self.persist().await;
                Ok(images)
            }
            Err(err) => Err(err),
        };

        self.status.complete(result).await
    }

    pub async fn delete(&self, id: &str, office_code: &str) -> Result<()> {
        self.status.begin().await;

        let result = async {
            self.client
                .post(DELETE_PATH, &json!({ "id": id, "officeCode": office_code }))
                .await
                .ok()?;

            self.items.write().await.retain(|image| image.id != id);
            self.persist().await;
            Ok(())
        }
        .await;

        self.status.complete(result).await
    }

    async fn persist(&self) {
        let items = self.items.read().await.clone();
        if let Err(err) = self.storage.save(StateFile::ImageStore, &items).await {
            tracing::warn!("failed to persist image cache: {err:#}");
        }
    }
}
