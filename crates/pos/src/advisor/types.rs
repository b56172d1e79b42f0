//! Request/response types for the Gemini `generateContent` API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// A `generateContent` request.
#[derive(Debug, Serialize)]
pub(super) struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One content block (a turn) in the request or response.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content block: text or inline binary data.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        rename = "inlineData",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// A plain text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline binary part (base64-encoded).
    pub fn inline(data: String, mime_type: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data,
            }),
        }
    }
}

/// Base64-encoded inline data with its mime type.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// Generation parameters.
#[derive(Debug, Default, Serialize)]
pub(super) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(rename = "topP", skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

/// A `generateContent` response.
#[derive(Debug, Deserialize)]
pub(super) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// One response candidate.
#[derive(Debug, Deserialize)]
pub(super) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// One product line of the inventory snapshot sent for profit analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryLine {
    /// Product name.
    pub name: String,
    /// Purchase (cost) price.
    pub cost: Decimal,
    /// Sale price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: u32,
}

impl From<&Product> for InventoryLine {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            cost: product.purchase_price,
            price: product.price,
            stock: product.stock,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part::inline("QUJD".to_string(), "image/png")],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                top_p: Some(0.9),
                response_mime_type: Some("application/json".to_string()),
                response_schema: None,
            }),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"topP\""));
        assert!(json.contains("\"responseMimeType\""));
        assert!(json.contains("\"inlineData\""));
        assert!(json.contains("\"mimeType\""));
    }

    #[test]
    fn test_first_text_concatenates_parts() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "مرحبا "}, {"text": "بك"}]}
            }]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text().unwrap(), "مرحبا بك");
    }

    #[test]
    fn test_first_text_none_for_empty_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_first_text_none_for_blank_text() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_inventory_line_serializes_expected_fields() {
        let line = InventoryLine {
            name: "عباية".to_string(),
            cost: Decimal::new(3000, 0),
            price: Decimal::new(5000, 0),
            stock: 4,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["name"], "عباية");
        assert_eq!(json["stock"], 4);
    }
}
