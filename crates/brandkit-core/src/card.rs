//! Content card entities.
//!
//! Cards are the tenant-scoped content tiles shown on the office landing
//! page. Each card has a type discriminant selecting which payload fields
//! are meaningful, and a display order unique within the tenant's visible
//! set.

use serde::{Deserialize, Serialize};

/// Discriminant for which payload fields of a [`Card`] carry meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    /// Card referencing an AI agent; `agent_id` is meaningful.
    AgentReference,
    /// Card listing suggested questions; `questions` is meaningful.
    QuestionList,
    /// Free-text content card; `content` is meaningful.
    FreeText,
}

/// A content card as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub office_code: String,
    pub card_type: CardType,
    #[serde(default)]
    pub title: Option<String>,
    /// Free-text body; meaningful for `FreeText` cards.
    #[serde(default)]
    pub content: Option<String>,
    /// Referenced agent id; meaningful for `AgentReference` cards.
    #[serde(default)]
    pub agent_id: Option<String>,
    /// Suggested questions; meaningful for `QuestionList` cards.
    #[serde(default)]
    pub questions: Vec<String>,
    /// Position within the tenant's visible set (the server keeps this in
    /// the 1..=3 range and unique per tenant).
    pub display_order: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating a card. Identity, tenant and audit
/// fields are owned by the server/store, never by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_deserializes_from_camel_case_wire_format() {
        let json = r#"{
            "id": "c1",
            "officeCode": "ktds",
            "cardType": "QUESTION_LIST",
            "questions": ["What is Brandkit?"],
            "displayOrder": 1,
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-02T00:00:00Z"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.office_code, "ktds");
        assert_eq!(card.card_type, CardType::QuestionList);
        assert_eq!(card.questions, vec!["What is Brandkit?"]);
        assert_eq!(card.display_order, 1);
        assert_eq!(card.title, None);
    }

    #[test]
    fn card_input_omits_unset_fields() {
        let input = CardInput {
            card_type: Some(CardType::FreeText),
            content: Some("Welcome".to_string()),
            ..CardInput::default()
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["cardType"], "FREE_TEXT");
        assert_eq!(value["content"], "Welcome");
        assert!(value.get("agentId").is_none());
        assert!(value.get("questions").is_none());
    }
}
