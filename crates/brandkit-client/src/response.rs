//! Normalized response types.
//!
//! The backend wraps every JSON payload in a
//! `{ success, code?, message, data, timestamp? }` envelope, but a handful
//! of endpoints return the payload bare. Extraction is an explicit
//! two-branch decision here (enveloped vs. raw), not a runtime duck-typing
//! fallback scattered across callers.

use brandkit_core::BrandkitError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status used for transport-level failures where no HTTP response was
/// received (DNS, connection refused, abort/timeout).
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// A received HTTP response before classification: status plus raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedResponse {
    pub status: u16,
    pub body: String,
}

impl ReceivedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The uniform result of every client call. Exactly one variant is
/// populated; `Success` carries data only, `Failure` never does.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Success {
        status: u16,
        data: Value,
        message: String,
    },
    Failure {
        status: u16,
        message: String,
    },
}

impl ApiOutcome {
    pub fn transport_failure(message: impl Into<String>) -> Self {
        ApiOutcome::Failure {
            status: TRANSPORT_FAILURE_STATUS,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success { .. })
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiOutcome::Success { status, .. } | ApiOutcome::Failure { status, .. } => *status,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiOutcome::Success { message, .. } | ApiOutcome::Failure { message, .. } => message,
        }
    }

    /// Deserializes the success data into `T`; failures become
    /// [`BrandkitError::Api`] carrying the status and message.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, BrandkitError> {
        match self {
            ApiOutcome::Success { data, .. } => Ok(serde_json::from_value(data)?),
            ApiOutcome::Failure { status, message } => Err(BrandkitError::api(status, message)),
        }
    }

    /// Discards the data, keeping only success/failure.
    pub fn ok(self) -> Result<(), BrandkitError> {
        match self {
            ApiOutcome::Success { .. } => Ok(()),
            ApiOutcome::Failure { status, message } => Err(BrandkitError::api(status, message)),
        }
    }
}

/// Payload extracted from a response body, with the branch that produced it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExtractedPayload {
    pub data: Value,
    pub message: Option<String>,
}

/// Parses a response body, tolerating non-JSON.
///
/// Branches, in order:
/// 1. Enveloped: a JSON object containing a `data` key. `data` becomes the
///    payload, the envelope's `message` is surfaced.
/// 2. Raw: any other valid JSON. The whole value is the payload; a
///    top-level `message` string is surfaced when present.
/// 3. Unparseable: treated as an empty payload, never as an error.
pub(crate) fn extract_payload(body: &str) -> ExtractedPayload {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return ExtractedPayload {
            data: Value::Null,
            message: None,
        };
    };

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);

    match value.get("data") {
        // Enveloped branch
        Some(data) => ExtractedPayload {
            data: data.clone(),
            message,
        },
        // Raw branch
        None => ExtractedPayload {
            data: value,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enveloped_body_yields_nested_data() {
        let body = r#"{"success":true,"message":"ok","data":[{"id":"c1"}]}"#;
        let extracted = extract_payload(body);
        assert_eq!(extracted.data, json!([{ "id": "c1" }]));
        assert_eq!(extracted.message.as_deref(), Some("ok"));
    }

    #[test]
    fn raw_body_is_used_whole() {
        let body = r#"{"id":"c1","name":"card"}"#;
        let extracted = extract_payload(body);
        assert_eq!(extracted.data, json!({ "id": "c1", "name": "card" }));
        assert_eq!(extracted.message, None);
    }

    #[test]
    fn unparseable_body_is_tolerated_as_empty() {
        let extracted = extract_payload("<html>gateway error</html>");
        assert_eq!(extracted.data, Value::Null);
        assert_eq!(extracted.message, None);
    }

    #[test]
    fn decode_failure_carries_status_and_message() {
        let outcome = ApiOutcome::Failure {
            status: 404,
            message: "not found".to_string(),
        };
        let err = outcome.decode::<Value>().unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
