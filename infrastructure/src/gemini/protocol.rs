//! Wire types for the Gemini `generateContent` REST API
//!
//! Mirrors the camelCase JSON payloads of the v1beta endpoint. Request
//! types serialize only the fields we send; response types tolerate
//! fields we do not read.

use serde::{Deserialize, Serialize};

// ==================== Requests ====================

/// Request body for a `generateContent` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A single conversation message.
///
/// The endpoint accepts `"user"` and `"model"` roles in `contents`;
/// the role on a `systemInstruction` entry is ignored by the API.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role("user", text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role("model", text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::with_role("system", text)
    }

    fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A text part of a request message. We never send binary parts.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Generation tuning sent as `generationConfig`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

/// Image generation parameters nested under `generationConfig`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub image_size: String,
    pub aspect_ratio: String,
}

// ==================== Responses ====================

/// Response body from a `generateContent` call.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Parts of the first candidate, or empty when the response
    /// carried no usable candidate.
    pub fn into_parts(self) -> Vec<ResponsePart> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default()
    }

    /// All text across the first candidate's parts, concatenated.
    pub fn into_text(self) -> String {
        self.into_parts()
            .into_iter()
            .filter_map(|part| part.text)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One part of a model reply. Parts carrying neither text nor inline
/// data (thought markers and the like) deserialize with both unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded binary payload with its MIME type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    pub data: String,
}

fn default_mime_type() -> String {
    "image/png".to_string()
}

// ==================== Errors ====================

/// Error envelope returned alongside non-2xx status codes.
#[derive(Debug, Deserialize)]
pub struct ErrorWrapper {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: Option<i32>,
    pub message: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("What is a triad?")],
            system_instruction: Some(Content::system("You are a tutor.")),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(json!({"type": "OBJECT"})),
                image_config: None,
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "What is a triad?");
        assert_eq!(value["systemInstruction"]["role"], "system");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_unset_request_fields_are_omitted() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            system_instruction: None,
            generation_config: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_none());
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn test_image_config_serializes_nested() {
        let config = GenerationConfig {
            image_config: Some(ImageConfig {
                image_size: "2K".to_string(),
                aspect_ratio: "1:1".to_string(),
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["imageConfig"]["imageSize"], "2K");
        assert_eq!(value["imageConfig"]["aspectRatio"], "1:1");
    }

    #[test]
    fn test_response_text_extraction() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "A triad "}, {"text": "has three notes."}]
                }
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.into_text(), "A triad has three notes.");
    }

    #[test]
    fn test_response_inline_data() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "inlineData": {"mimeType": "image/png", "data": "aWJyaXM="}
                    }]
                }
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let parts = response.into_parts();
        assert_eq!(parts.len(), 1);
        let inline = parts[0].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "aWJyaXM=");
    }

    #[test]
    fn test_mime_type_defaults_when_omitted() {
        let body = json!({"data": "aWJyaXM="});
        let inline: InlineData = serde_json::from_value(body).unwrap();
        assert_eq!(inline.mime_type, "image/png");
    }

    #[test]
    fn test_unknown_part_fields_are_tolerated() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{"thought": true}, {"text": "after"}]
                }
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.into_text(), "after");
    }

    #[test]
    fn test_empty_response_body() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_parts().is_empty());
    }

    #[test]
    fn test_error_envelope_parses() {
        let body = json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        });

        let wrapper: ErrorWrapper = serde_json::from_value(body).unwrap();
        assert_eq!(wrapper.error.code, Some(429));
        assert_eq!(
            wrapper.error.message.as_deref(),
            Some("Resource has been exhausted")
        );
        assert_eq!(wrapper.error.status.as_deref(), Some("RESOURCE_EXHAUSTED"));
    }
}
