//! Shared fixtures for the store tests: a scripted transport standing in
//! for the network, plus a logged-in client/session pair over a temp dir.

use crate::state_storage::JsonStateStorage;
use crate::token_store::TokenStore;
use brandkit_client::{ApiClient, HttpTransport, ReceivedResponse, RequestDescriptor, TransportError};
use brandkit_core::config::ClientConfig;
use brandkit_core::{AuthDataPatch, NoopExpiryHandler, SessionStore};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Transport that records descriptors and replays canned `(status, body)`
/// responses in order, repeating `200 {}` once exhausted.
pub(crate) struct MockTransport {
    pub requests: Mutex<Vec<RequestDescriptor>>,
    responses: Mutex<Vec<(u16, String)>>,
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn send(
        &self,
        descriptor: RequestDescriptor,
    ) -> std::result::Result<ReceivedResponse, TransportError> {
        self.requests.lock().await.push(descriptor);
        let mut responses = self.responses.lock().await;
        if responses.is_empty() {
            return Ok(ReceivedResponse::new(200, "{}"));
        }
        let (status, body) = responses.remove(0);
        Ok(ReceivedResponse::new(status, body))
    }
}

pub(crate) struct Harness {
    pub transport: Arc<MockTransport>,
    pub client: Arc<ApiClient>,
    pub session: Arc<TokenStore>,
    pub storage: JsonStateStorage,
}

impl Harness {
    /// Builds a logged-in harness over `base_dir` replying with the given
    /// `(status, body)` sequence.
    pub async fn replying(base_dir: &Path, responses: Vec<(u16, String)>) -> Self {
        let transport = Arc::new(MockTransport {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses),
        });

        let storage = JsonStateStorage::new(base_dir);
        let session = Arc::new(TokenStore::new(storage.clone()));
        session
            .set_auth_data(AuthDataPatch::tokens("test-token", "test-refresh"))
            .await;

        let config = ClientConfig {
            api_base_url: "https://api.example.com".to_string(),
            request_timeout_secs: 5,
        };
        let client = Arc::new(ApiClient::with_transport(
            transport.clone(),
            &config,
            session.clone(),
            Arc::new(NoopExpiryHandler),
        ));

        Self {
            transport,
            client,
            session,
            storage,
        }
    }
}

/// A minimal card entity in the server's wire shape.
pub(crate) fn card_json(id: &str, display_order: u32) -> Value {
    json!({
        "id": id,
        "officeCode": "ktds",
        "cardType": "FREE_TEXT",
        "content": "body",
        "displayOrder": display_order,
    })
}

/// A minimal logo entity in the server's wire shape.
pub(crate) fn logo_json(id: &str, selected: bool) -> Value {
    json!({
        "id": id,
        "officeCode": "ktds",
        "imageUrl": format!("https://cdn.example.com/{id}.png"),
        "isSelected": selected,
    })
}
