//! Transport seam: the one place the client actually touches the network.
//!
//! Everything above this trait works on descriptors and received responses,
//! so tests substitute a mock transport instead of a mock server.

use crate::request::{Method, RequestBody, RequestDescriptor};
use crate::response::ReceivedResponse;
use async_trait::async_trait;

/// Transport-level failure: the call never produced an HTTP response.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Issues a described request and returns the raw response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, descriptor: RequestDescriptor) -> Result<ReceivedResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, descriptor: RequestDescriptor) -> Result<ReceivedResponse, TransportError> {
        let method = match descriptor.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &descriptor.url);

        for (name, value) in &descriptor.headers {
            builder = builder.header(name, value);
        }

        // The client core fills the configured default before dispatch, so
        // an unset timeout here means the caller explicitly wants none.
        if let Some(timeout) = descriptor.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match descriptor.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(payload) => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in payload.fields {
                    form = form.text(name, value);
                }
                for file in payload.files {
                    let mime = mime_guess::from_path(&file.file_name)
                        .first_or_octet_stream()
                        .to_string();
                    let part = reqwest::multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&mime)
                        .map_err(|err| TransportError(format!("invalid MIME type: {err}")))?;
                    form = form.part(file.name, part);
                }
                // reqwest sets the multipart Content-Type (with boundary) itself.
                builder.multipart(form)
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError(format!("failed to read response body: {err}")))?;

        Ok(ReceivedResponse { status, body })
    }
}
