//! Request descriptor types.
//!
//! A [`RequestDescriptor`] is the client's own, fully inspectable picture of
//! an outgoing request. Interceptors transform descriptors, not transport
//! handles, so the auth-injection contract can be tested without a network.

use std::collections::BTreeMap;
use std::time::Duration;

/// HTTP methods the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// One file part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name (e.g. `"file"`).
    pub name: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A multipart/form-data body: plain text fields plus file parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartPayload {
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.files.push(FilePart {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
        });
        self
    }
}

/// Body of an outgoing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// Multipart bodies never get a client-set Content-Type; the transport
    /// owns the header so the boundary parameter stays correct.
    Multipart(MultipartPayload),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// Full description of an outgoing request, before and after interception.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Absolute URL; relative paths are resolved by the client core before
    /// the descriptor reaches the interceptor.
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: RequestBody,
    /// Per-request timeout; the client core fills in the configured default
    /// when the caller leaves this unset.
    pub timeout: Option<Duration>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body: RequestBody::Empty,
            timeout: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, payload: MultipartPayload) -> Self {
        self.body = RequestBody::Multipart(payload);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let descriptor = RequestDescriptor::new(Method::Post, "https://api.example.com/x")
            .header("Content-Type", "application/json");

        assert_eq!(
            descriptor.header_value("content-type"),
            Some("application/json")
        );
        assert_eq!(descriptor.header_value("Authorization"), None);
    }

    #[test]
    fn multipart_body_is_flagged() {
        let payload = MultipartPayload::default()
            .field("officeCode", "ktds")
            .file("file", "logo.png", vec![1, 2, 3]);
        let descriptor =
            RequestDescriptor::new(Method::Post, "https://api.example.com/upload").multipart(payload);

        assert!(descriptor.body.is_multipart());
    }
}
