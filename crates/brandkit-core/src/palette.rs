//! Color palette entity.

use serde::{Deserialize, Serialize};

/// The tenant's color palette: a fixed six-field record, one row per
/// office. No identity or list semantics; fetched and upserted whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub office_code: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub point_color: String,
}

impl ColorPalette {
    /// Default palette for a tenant that has not customized its colors yet.
    pub fn default_for(office_code: impl Into<String>) -> Self {
        Self {
            office_code: office_code.into(),
            primary_color: "#1E3A5F".to_string(),
            secondary_color: "#4A6FA5".to_string(),
            accent_color: "#E8833A".to_string(),
            background_color: "#FFFFFF".to_string(),
            text_color: "#1A1A1A".to_string(),
            point_color: "#D64545".to_string(),
        }
    }
}
