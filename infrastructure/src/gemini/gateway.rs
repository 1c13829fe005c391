//! Gemini implementation of the oracle gateway
//!
//! Talks to the public `generateContent` REST endpoint. Structured
//! theory queries pin the response to a JSON schema, image requests
//! carry an `imageConfig`, and chat sessions are handed off to
//! [`GeminiConversation`].

use super::error::{GeminiError, Result as GeminiResult};
use super::protocol::{Content, GenerateContentRequest, GenerationConfig, ImageConfig, ResponsePart};
use super::schema::to_gemini_schema;
use super::session::GeminiConversation;
use super::transport::{Transport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use muse_application::ports::oracle::{OracleConversation, OracleError, OracleGateway};
use muse_domain::{ConversationTurn, ImagePart, ImagePayload, Model, Prompt, ResolutionTier, ResponseSchema};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const IMAGE_ASPECT_RATIO: &str = "1:1";

pub struct GeminiGateway {
    transport: Arc<Transport>,
}

impl GeminiGateway {
    /// Create a gateway against the public Gemini endpoint.
    pub fn new(api_key: impl Into<String>) -> GeminiResult<Self> {
        Self::with_settings(api_key, None, None)
    }

    /// Create a gateway with an overridden endpoint or timeout.
    pub fn with_settings(
        api_key: impl Into<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> GeminiResult<Self> {
        let transport = Transport::new(
            api_key.into(),
            base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout.unwrap_or(DEFAULT_TIMEOUT),
        )?;
        Ok(Self {
            transport: Arc::new(transport),
        })
    }
}

#[async_trait]
impl OracleGateway for GeminiGateway {
    async fn generate_structured(
        &self,
        model: &Model,
        instruction: &str,
        schema: &ResponseSchema,
    ) -> Result<String, OracleError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(instruction)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(to_gemini_schema(schema)),
                image_config: None,
            }),
        };

        let response = self.transport.generate(model, &request).await?;
        let text = response.into_text();
        if text.trim().is_empty() {
            return Err(OracleError::EmptyResponse);
        }
        Ok(text)
    }

    async fn generate_image(
        &self,
        model: &Model,
        prompt: &Prompt,
        resolution: ResolutionTier,
    ) -> Result<ImagePayload, OracleError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt.content())],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    image_size: resolution.image_size().to_string(),
                    aspect_ratio: IMAGE_ASPECT_RATIO.to_string(),
                }),
                ..Default::default()
            }),
        };

        let response = self.transport.generate(model, &request).await?;
        Ok(payload_from_parts(response.into_parts())?)
    }

    async fn start_conversation(
        &self,
        model: &Model,
        persona: &str,
        history: &[ConversationTurn],
    ) -> Result<Box<dyn OracleConversation>, OracleError> {
        debug!(model = %model, seeded = history.len(), "Opening tutor conversation");
        let session = GeminiConversation::new(
            Arc::clone(&self.transport),
            model.clone(),
            persona,
            history,
        );
        Ok(Box::new(session))
    }
}

/// Decode response parts into the domain payload. Inline parts whose
/// data decodes to zero bytes do not count as image data, so a reply
/// carrying only degenerate parts fails the same way as one with none.
fn payload_from_parts(parts: Vec<ResponsePart>) -> GeminiResult<ImagePayload> {
    let mut collected = Vec::new();
    for part in parts {
        if let Some(inline) = part.inline_data {
            let bytes = BASE64_STANDARD.decode(inline.data)?;
            if bytes.is_empty() {
                continue;
            }
            collected.push(ImagePart::Inline {
                mime_type: inline.mime_type,
                bytes,
            });
        } else if let Some(text) = part.text {
            collected.push(ImagePart::Text(text));
        }
    }

    let payload = ImagePayload::from_parts(collected);
    if !payload.has_inline() {
        return Err(GeminiError::NoImagePart);
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::protocol::InlineData;

    fn text_part(text: &str) -> ResponsePart {
        ResponsePart {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn inline_part(mime_type: &str, data: &str) -> ResponsePart {
        ResponsePart {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            }),
        }
    }

    #[test]
    fn test_payload_decodes_inline_data() {
        let parts = vec![text_part("Here is your artwork."), inline_part("image/png", "iVBORw==")];
        let payload = payload_from_parts(parts).unwrap();

        assert!(payload.has_inline());
        let (mime, bytes) = payload.first_inline().unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, [0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(payload.text_content(), "Here is your artwork.");
    }

    #[test]
    fn test_text_only_parts_fail() {
        let parts = vec![text_part("I cannot draw that.")];
        let err = payload_from_parts(parts).unwrap_err();
        assert!(matches!(err, GeminiError::NoImagePart));
    }

    #[test]
    fn test_empty_parts_fail() {
        let err = payload_from_parts(Vec::new()).unwrap_err();
        assert!(matches!(err, GeminiError::NoImagePart));
    }

    #[test]
    fn test_corrupt_base64_fails() {
        let parts = vec![inline_part("image/png", "not base64!!")];
        let err = payload_from_parts(parts).unwrap_err();
        assert!(matches!(err, GeminiError::Decode(_)));
    }

    #[test]
    fn test_zero_byte_inline_data_is_not_an_image() {
        let parts = vec![text_part("Done."), inline_part("image/png", "")];
        let err = payload_from_parts(parts).unwrap_err();
        assert!(matches!(err, GeminiError::NoImagePart));
    }

    #[test]
    fn test_zero_byte_inline_part_is_skipped() {
        let parts = vec![
            inline_part("image/png", ""),
            inline_part("image/png", "iVBORw=="),
        ];
        let payload = payload_from_parts(parts).unwrap();

        let (mime, bytes) = payload.first_inline().unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, [0x89, 0x50, 0x4e, 0x47]);
    }

    #[tokio::test]
    async fn test_start_conversation_carries_model() {
        let gateway = GeminiGateway::new("test-key").unwrap();
        let history = vec![ConversationTurn::user("hello")];
        let session = gateway
            .start_conversation(&Model::Gemini3Pro, "You are a tutor.", &history)
            .await
            .unwrap();
        assert_eq!(session.model(), &Model::Gemini3Pro);
    }
}
