//! Persisted session store.
//!
//! Holds the access/refresh tokens and user identity, persisting the whole
//! session to `auth-store.json` after every mutation and restoring it at
//! startup. Persistence failures are logged and swallowed: from the
//! caller's point of view these operations cannot fail.

use crate::state_storage::{JsonStateStorage, StateFile};
use async_trait::async_trait;
use brandkit_core::{AuthDataPatch, AuthSession, SessionStore};
use tokio::sync::RwLock;

pub struct TokenStore {
    session: RwLock<AuthSession>,
    storage: JsonStateStorage,
}

impl TokenStore {
    pub fn new(storage: JsonStateStorage) -> Self {
        Self {
            session: RwLock::new(AuthSession::default()),
            storage,
        }
    }

    /// Creates a store and restores any persisted session before first
    /// read.
    pub async fn restore(storage: JsonStateStorage) -> Self {
        let store = Self::new(storage);
        match store.storage.load::<AuthSession>(StateFile::AuthStore).await {
            Ok(Some(session)) => {
                *store.session.write().await = session;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("failed to restore session state: {err:#}");
            }
        }
        store
    }

    /// Convenience accessor for the login form.
    pub async fn remembered_email(&self) -> Option<String> {
        self.session.read().await.remembered_email.clone()
    }

    async fn persist(&self) {
        let snapshot = self.session.read().await.clone();
        if let Err(err) = self.storage.save(StateFile::AuthStore, &snapshot).await {
            tracing::warn!("failed to persist session state: {err:#}");
        }
    }
}

#[async_trait]
impl SessionStore for TokenStore {
    async fn snapshot(&self) -> AuthSession {
        self.session.read().await.clone()
    }

    async fn auth_header(&self) -> Option<String> {
        self.session.read().await.auth_header()
    }

    async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_logged_in()
    }

    async fn set_auth_data(&self, patch: AuthDataPatch) {
        self.session.write().await.apply(patch);
        self.persist().await;
    }

    async fn logout(&self) {
        self.session.write().await.clear_credentials();
        self.persist().await;
        tracing::debug!("logged out, remembered email preserved");
    }

    async fn force_logout(&self) {
        self.session.write().await.clear_all();
        self.persist().await;
        tracing::debug!("forced logout, session fully cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn patch_for_login() -> AuthDataPatch {
        AuthDataPatch {
            access_token: Some("at-1".to_string()),
            refresh_token: Some("rt-1".to_string()),
            user_email: Some("admin@ktds.com".to_string()),
            is_initial_password: Some(false),
            remembered_email: Some("admin@ktds.com".to_string()),
        }
    }

    #[tokio::test]
    async fn session_survives_store_restart() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonStateStorage::new(temp_dir.path());

        let store = TokenStore::new(storage.clone());
        store.set_auth_data(patch_for_login()).await;

        // A fresh instance over the same directory sees the session.
        let restored = TokenStore::restore(storage).await;
        assert!(restored.is_logged_in().await);
        assert_eq!(
            restored.auth_header().await.as_deref(),
            Some("Bearer at-1")
        );
    }

    #[tokio::test]
    async fn logout_keeps_remembered_email_across_restart() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonStateStorage::new(temp_dir.path());

        let store = TokenStore::new(storage.clone());
        store.set_auth_data(patch_for_login()).await;
        store.logout().await;

        let restored = TokenStore::restore(storage).await;
        assert!(!restored.is_logged_in().await);
        assert_eq!(
            restored.remembered_email().await.as_deref(),
            Some("admin@ktds.com")
        );
    }

    #[tokio::test]
    async fn force_logout_clears_everything() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonStateStorage::new(temp_dir.path());

        let store = TokenStore::new(storage.clone());
        store.set_auth_data(patch_for_login()).await;
        store.force_logout().await;

        let restored = TokenStore::restore(storage).await;
        assert!(!restored.is_logged_in().await);
        assert_eq!(restored.remembered_email().await, None);
        assert_eq!(restored.snapshot().await, AuthSession::default());
    }

    #[tokio::test]
    async fn restore_with_empty_dir_starts_clean() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::restore(JsonStateStorage::new(temp_dir.path())).await;
        assert!(!store.is_logged_in().await);
    }
}
