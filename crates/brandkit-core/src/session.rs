//! Authentication session model and store traits.
//!
//! `AuthSession` is the persisted shape of the login session: the token
//! pair, the logged-in user's email, and the "remembered email" used to
//! prefill the login form. The `SessionStore` trait is the seam between the
//! HTTP layer (which only reads the auth header and triggers a forced
//! logout on 401) and the infrastructure crate that owns persistence.

use serde::{Deserialize, Serialize};

/// Snapshot of the authentication session.
///
/// Invariant: the user counts as logged in exactly when `access_token` is
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSession {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user_email: Option<String>,
    pub is_initial_password: bool,
    /// Email remembered for login-form convenience. Survives a plain
    /// logout; cleared only by a forced logout.
    pub remembered_email: Option<String>,
}

impl AuthSession {
    /// Returns `"Bearer <token>"`, or None when no access token is held.
    pub fn auth_header(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    /// True iff an access token is present.
    pub fn is_logged_in(&self) -> bool {
        self.access_token.is_some()
    }

    /// Merges the provided fields into the session. Fields that are `None`
    /// in the patch are left unchanged. No validation is performed; the
    /// caller guarantees well-formed tokens.
    pub fn apply(&mut self, patch: AuthDataPatch) {
        if let Some(access_token) = patch.access_token {
            self.access_token = Some(access_token);
        }
        if let Some(refresh_token) = patch.refresh_token {
            self.refresh_token = Some(refresh_token);
        }
        if let Some(user_email) = patch.user_email {
            self.user_email = Some(user_email);
        }
        if let Some(is_initial_password) = patch.is_initial_password {
            self.is_initial_password = is_initial_password;
        }
        if let Some(remembered_email) = patch.remembered_email {
            self.remembered_email = Some(remembered_email);
        }
    }

    /// Clears credentials but keeps the remembered email (plain logout).
    pub fn clear_credentials(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.user_email = None;
        self.is_initial_password = false;
    }

    /// Clears everything including the remembered email (forced logout).
    pub fn clear_all(&mut self) {
        self.clear_credentials();
        self.remembered_email = None;
    }
}

/// Partial update for [`AuthSession`]; `None` fields are not touched.
#[derive(Debug, Clone, Default)]
pub struct AuthDataPatch {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user_email: Option<String>,
    pub is_initial_password: Option<bool>,
    pub remembered_email: Option<String>,
}

impl AuthDataPatch {
    /// Patch carrying a fresh token pair, as returned by login/refresh.
    pub fn tokens(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
            ..Self::default()
        }
    }
}

/// Read/write access to the authentication session.
///
/// Implementations persist the session on every mutation and restore it at
/// startup. Persistence failures are logged, never propagated: these
/// operations have no failure mode from the caller's point of view.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns a copy of the current session state.
    async fn snapshot(&self) -> AuthSession;

    /// Returns the `Authorization` header value, if logged in.
    async fn auth_header(&self) -> Option<String>;

    /// True iff an access token is held.
    async fn is_logged_in(&self) -> bool;

    /// Merges the patch into the session state.
    async fn set_auth_data(&self, patch: AuthDataPatch);

    /// Clears credentials, preserving the remembered email.
    async fn logout(&self);

    /// Clears credentials and the remembered email. Used on
    /// session-invalidation paths (401) where a full reset is desired.
    async fn force_logout(&self);
}

/// Hook invoked after a 401 response has torn the session down.
///
/// The embedding shell decides what "redirect to login" means; the HTTP
/// layer only guarantees the hook fires after `force_logout`.
#[async_trait::async_trait]
pub trait SessionExpiryHandler: Send + Sync {
    async fn on_session_expired(&self);
}

/// No-op expiry handler for embeddings that poll `is_logged_in` instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExpiryHandler;

#[async_trait::async_trait]
impl SessionExpiryHandler for NoopExpiryHandler {
    async fn on_session_expired(&self) {}
}
