//! Uploaded image assets.

use serde::{Deserialize, Serialize};

/// An uploaded image asset: the file the admin uploaded and the CDN URL the
/// server assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub id: String,
    pub office_code: String,
    pub file_name: String,
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}
