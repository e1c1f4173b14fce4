//! Request/response interceptor pair.
//!
//! The request side injects the bearer token into outgoing descriptors; the
//! response side classifies received responses into [`ApiOutcome`] and owns
//! the 401 teardown path. Every call the client issues passes through
//! exactly this pair.

use crate::request::RequestDescriptor;
use crate::response::{ApiOutcome, ReceivedResponse, extract_payload};
use brandkit_core::{SessionExpiryHandler, SessionStore};
use std::sync::Arc;

/// Header name the request interceptor owns.
pub const AUTHORIZATION: &str = "Authorization";

/// Applies the stored auth header to an outgoing descriptor.
///
/// With no stored token the descriptor passes through unchanged: requests
/// to public endpoints proceed unauthenticated by design. With a token,
/// exactly one `Authorization` header is set; re-running the interceptor
/// overwrites rather than duplicates it. Multipart descriptors get the same
/// treatment — only `Authorization` is ever touched, `Content-Type` stays
/// whatever the transport decides.
pub fn attach_auth_header(
    mut descriptor: RequestDescriptor,
    auth_header: Option<&str>,
) -> RequestDescriptor {
    if let Some(value) = auth_header {
        descriptor
            .headers
            .insert(AUTHORIZATION.to_string(), value.to_string());
    }
    descriptor
}

/// Classifies received responses and handles session expiry.
pub struct ResponseInterceptor {
    session: Arc<dyn SessionStore>,
    expiry_handler: Arc<dyn SessionExpiryHandler>,
}

impl ResponseInterceptor {
    pub fn new(
        session: Arc<dyn SessionStore>,
        expiry_handler: Arc<dyn SessionExpiryHandler>,
    ) -> Self {
        Self {
            session,
            expiry_handler,
        }
    }

    /// Turns a received response into exactly one [`ApiOutcome`] variant.
    ///
    /// 2xx becomes `Success` (with a tolerant body parse: non-JSON counts
    /// as empty data, not an error). 401 tears the session down via
    /// `force_logout`, fires the expiry hook, and still returns a regular
    /// `Failure` so the caller's future resolves instead of hanging. Any
    /// other status is a `Failure` with the server's message or a default.
    pub async fn intercept(&self, response: ReceivedResponse) -> ApiOutcome {
        let status = response.status;
        let extracted = extract_payload(&response.body);

        if (200..=299).contains(&status) {
            return ApiOutcome::Success {
                status,
                data: extracted.data,
                message: extracted.message.unwrap_or_else(|| "Success".to_string()),
            };
        }

        if status == 401 {
            tracing::warn!("received 401, tearing down session");
            self.session.force_logout().await;
            self.expiry_handler.on_session_expired().await;
            return ApiOutcome::Failure {
                status,
                message: extracted
                    .message
                    .unwrap_or_else(|| "Unauthorized".to_string()),
            };
        }

        ApiOutcome::Failure {
            status,
            message: extracted
                .message
                .unwrap_or_else(|| format!("Error {}", status)),
        }
    }
}
