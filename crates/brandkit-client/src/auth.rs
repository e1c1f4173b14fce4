//! Auth endpoints and client-side credential validation.
//!
//! Validation failures (malformed email, password confirmation mismatch)
//! are raised synchronously, before any network dispatch. Successful
//! login/refresh calls write the issued tokens into the session store.

use crate::http::ApiClient;
use brandkit_core::{AuthDataPatch, BrandkitError, Result, SessionStore};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

const PUBLIC_KEY_PATH: &str = "/api/auth/public-key";
const LOGIN_PATH: &str = "/api/auth/login";
const REFRESH_PATH: &str = "/api/auth/refresh";
const CHANGE_PASSWORD_PATH: &str = "/api/auth/change-password";
const CHANGE_INITIAL_PASSWORD_PATH: &str = "/api/auth/change-initial-password";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile")
});

/// Server-issued public key for credential transport.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    pub public_key: String,
}

/// Credentials for [`AuthApi::login`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// When set, the email is remembered for login-form convenience and
    /// survives a plain logout.
    #[serde(skip)]
    pub remember_email: bool,
}

/// Token pair issued on login/refresh.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub is_initial_password: bool,
}

/// Auth endpoint facade.
pub struct AuthApi {
    client: Arc<ApiClient>,
    session: Arc<dyn SessionStore>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>, session: Arc<dyn SessionStore>) -> Self {
        Self { client, session }
    }

    /// Fetches the server's public key. Unauthenticated endpoint.
    pub async fn public_key(&self) -> Result<PublicKeyResponse> {
        self.client.post(PUBLIC_KEY_PATH, &json!({})).await.decode()
    }

    /// Logs in and stores the issued tokens in the session store.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse> {
        validate_email(&request.email)?;

        let tokens: TokenResponse = self.client.post(LOGIN_PATH, &request).await.decode()?;

        let mut patch = AuthDataPatch::tokens(&tokens.access_token, &tokens.refresh_token);
        patch.user_email = Some(request.email.clone());
        patch.is_initial_password = Some(tokens.is_initial_password);
        if request.remember_email {
            patch.remembered_email = Some(request.email.clone());
        }
        self.session.set_auth_data(patch).await;

        tracing::info!(email = %request.email, "login succeeded");
        Ok(tokens)
    }

    /// Exchanges the stored refresh token for a fresh token pair.
    pub async fn refresh(&self) -> Result<TokenResponse> {
        let snapshot = self.session.snapshot().await;
        let refresh_token = snapshot
            .refresh_token
            .ok_or_else(|| BrandkitError::Security("no refresh token held".to_string()))?;

        let tokens: TokenResponse = self
            .client
            .post(REFRESH_PATH, &json!({ "refreshToken": refresh_token }))
            .await
            .decode()?;

        self.session
            .set_auth_data(AuthDataPatch::tokens(
                &tokens.access_token,
                &tokens.refresh_token,
            ))
            .await;

        Ok(tokens)
    }

    /// Changes the password of the logged-in user.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        validate_password_pair(new_password, confirm_password)?;

        self.client
            .post(
                CHANGE_PASSWORD_PATH,
                &json!({
                    "currentPassword": current_password,
                    "newPassword": new_password,
                }),
            )
            .await
            .ok()
    }

    /// First-login password change. On success the initial-password flag is
    /// cleared in the session.
    pub async fn change_initial_password(
        &self,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        validate_password_pair(new_password, confirm_password)?;

        self.client
            .post(
                CHANGE_INITIAL_PASSWORD_PATH,
                &json!({ "newPassword": new_password }),
            )
            .await
            .ok()?;

        self.session
            .set_auth_data(AuthDataPatch {
                is_initial_password: Some(false),
                ..AuthDataPatch::default()
            })
            .await;

        Ok(())
    }
}

fn validate_email(email: &str) -> Result<()> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(BrandkitError::validation(format!(
            "malformed email address: '{email}'"
        )))
    }
}

fn validate_password_pair(new_password: &str, confirm_password: &str) -> Result<()> {
    if new_password.is_empty() {
        return Err(BrandkitError::validation("password must not be empty"));
    }
    if new_password != confirm_password {
        return Err(BrandkitError::validation(
            "password confirmation does not match",
        ));
    }
    Ok(())
}
