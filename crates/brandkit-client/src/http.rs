//! HTTP client core.
//!
//! Single entry point `request`; the verb wrappers differ only in method
//! and body/query construction. Control flow per call: resolve URL → apply
//! default headers → request interceptor (its output is what gets sent) →
//! transport → response interceptor.

use crate::interceptor::{AUTHORIZATION, ResponseInterceptor, attach_auth_header};
use crate::request::{Method, MultipartPayload, RequestDescriptor};
use crate::response::ApiOutcome;
use crate::transport::{HttpTransport, ReqwestTransport};
use brandkit_core::config::ClientConfig;
use brandkit_core::{SessionExpiryHandler, SessionStore};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// The client every resource store talks through.
///
/// Holds the transport, the session store (read for auth injection, written
/// only through the 401 teardown), and the configured base URL and default
/// timeout. Instances are cheap to share behind an `Arc`.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
    response_interceptor: ResponseInterceptor,
    base_url: String,
    default_timeout: Duration,
}

impl ApiClient {
    /// Creates a client backed by the production reqwest transport.
    pub fn new(
        config: &ClientConfig,
        session: Arc<dyn SessionStore>,
        expiry_handler: Arc<dyn SessionExpiryHandler>,
    ) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()), config, session, expiry_handler)
    }

    /// Creates a client over an explicit transport. This is the seam tests
    /// use to substitute a scripted transport for the network.
    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        config: &ClientConfig,
        session: Arc<dyn SessionStore>,
        expiry_handler: Arc<dyn SessionExpiryHandler>,
    ) -> Self {
        let response_interceptor = ResponseInterceptor::new(session.clone(), expiry_handler);
        Self {
            transport,
            session,
            response_interceptor,
            base_url: config.normalized_base_url().to_string(),
            default_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Resolves a possibly relative path against the configured base URL.
    /// URLs that already carry a scheme are used as-is.
    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issues a described request and returns the normalized outcome.
    ///
    /// Never returns `Err`: transport-level failures come back as
    /// `Failure { status: 0 }`. The interceptor's returned descriptor — not
    /// the original — is what goes on the wire; dropping that step would
    /// silently strip auth from every call.
    pub async fn request(&self, mut descriptor: RequestDescriptor) -> ApiOutcome {
        descriptor.url = self.resolve_url(&descriptor.url);

        if descriptor.timeout.is_none() {
            descriptor.timeout = Some(self.default_timeout);
        }

        // Default Content-Type, unless the caller set one or the body is
        // multipart (the transport owns that header for multipart).
        if !descriptor.body.is_multipart() && descriptor.header_value("Content-Type").is_none() {
            descriptor
                .headers
                .insert("Content-Type".to_string(), "application/json".to_string());
        }

        let auth_header = self.session.auth_header().await;
        let descriptor = attach_auth_header(descriptor, auth_header.as_deref());

        tracing::debug!(
            method = descriptor.method.as_str(),
            url = %descriptor.url,
            authenticated = descriptor.header_value(AUTHORIZATION).is_some(),
            "dispatching request"
        );

        match self.transport.send(descriptor).await {
            Ok(response) => self.response_interceptor.intercept(response).await,
            Err(err) => {
                tracing::warn!("transport failure: {err}");
                ApiOutcome::transport_failure(err.to_string())
            }
        }
    }

    /// GET with optional query parameters. `None` values are omitted; the
    /// query string is appended only when at least one pair survives.
    pub async fn get(&self, path: &str, query: &[(&str, Option<String>)]) -> ApiOutcome {
        let url = match append_query(&self.resolve_url(path), query) {
            Ok(url) => url,
            Err(message) => return ApiOutcome::transport_failure(message),
        };
        self.request(RequestDescriptor::new(Method::Get, url)).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiOutcome {
        self.send_json(Method::Post, path, body).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiOutcome {
        self.send_json(Method::Put, path, body).await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> ApiOutcome {
        self.send_json(Method::Patch, path, body).await
    }

    pub async fn delete<B: Serialize>(&self, path: &str, body: &B) -> ApiOutcome {
        self.send_json(Method::Delete, path, body).await
    }

    /// Multipart POST for file uploads. No Content-Type is set anywhere on
    /// this path — the transport must produce the boundary parameter — and
    /// only the bearer token is added by interception.
    pub async fn post_form_data(&self, path: &str, payload: MultipartPayload) -> ApiOutcome {
        self.request(RequestDescriptor::new(Method::Post, path).multipart(payload))
            .await
    }

    async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> ApiOutcome {
        let value = match serde_json::to_value(body) {
            Ok(value) => value,
            Err(err) => {
                return ApiOutcome::transport_failure(format!(
                    "failed to encode request body: {err}"
                ));
            }
        };
        self.request(RequestDescriptor::new(method, path).json(value))
            .await
    }
}

/// Appends defined query parameters to an absolute URL.
fn append_query(url: &str, query: &[(&str, Option<String>)]) -> Result<String, String> {
    let defined: Vec<(&str, &String)> = query
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (*key, v)))
        .collect();

    if defined.is_empty() {
        return Ok(url.to_string());
    }

    let mut parsed =
        reqwest::Url::parse(url).map_err(|err| format!("invalid request URL '{url}': {err}"))?;
    {
        let mut pairs = parsed.query_pairs_mut();
        for (key, value) in defined {
            pairs.append_pair(key, value);
        }
    }
    Ok(parsed.into())
}
