//! Error types for the Brandkit client core.

use thiserror::Error;

/// A shared error type for the entire Brandkit client.
///
/// Covers exactly the failure modes the client surfaces: API failures
/// carrying an HTTP status, client-side validation, auth preconditions,
/// and payload (de)serialization.
#[derive(Error, Debug, Clone)]
pub enum BrandkitError {
    /// API call failure carrying the HTTP status.
    ///
    /// Status 0 is reserved for transport-level failures where no response
    /// was received (DNS, connection refused, timeout).
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Client-side validation error, raised before any network dispatch
    #[error("Validation error: {0}")]
    Validation(String),

    /// Security/authentication error
    #[error("Security error: {0}")]
    Security(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },
}

impl BrandkitError {
    /// Creates an Api error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a transport-level failure (Api with status 0)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Api { status: 0, .. })
    }

    /// Check if this is an authentication failure (Api with status 401)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the HTTP status for Api errors, None otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BrandkitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, BrandkitError>`.
pub type Result<T> = std::result::Result<T, BrandkitError>;
