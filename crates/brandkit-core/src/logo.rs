//! Logo entities.

use serde::{Deserialize, Serialize};

/// A tenant logo as the server returns it.
///
/// At most one logo per tenant is selected at a time; selecting one
/// implicitly deselects all others. The server enforces this, and the logo
/// store mirrors it optimistically in its local cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub id: String,
    pub office_code: String,
    #[serde(default)]
    pub name: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub is_selected: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for registering a logo. The image itself is uploaded through the
/// image endpoints first; this carries the resulting URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub image_url: String,
}
