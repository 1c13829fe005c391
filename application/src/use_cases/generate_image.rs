//! Image generation use case.
//!
//! Asks the image oracle for artwork and keeps the first inline image from
//! the reply as an [`ImageAsset`]. A reply without image data is a hard
//! failure; there is no placeholder asset.

use crate::ports::oracle::{OracleError, OracleGateway};
use muse_domain::{ImageAsset, ModelConfig, Prompt, ResolutionTier};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during image generation.
#[derive(Error, Debug)]
pub enum GenerateImageError {
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// The oracle answered, but no part of the reply carried image data.
    #[error("Response contained no image data")]
    NoImage,
}

/// Input for the [`GenerateImageUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateImageInput {
    /// Description of the artwork to generate.
    pub prompt: Prompt,
    /// Output resolution tier.
    pub resolution: ResolutionTier,
    /// Model configuration; only `image` is used.
    pub models: ModelConfig,
}

impl GenerateImageInput {
    pub fn new(prompt: Prompt, resolution: ResolutionTier, models: ModelConfig) -> Self {
        Self {
            prompt,
            resolution,
            models,
        }
    }
}

/// Use case for generating one piece of artwork.
pub struct GenerateImageUseCase {
    oracle: Arc<dyn OracleGateway>,
}

impl GenerateImageUseCase {
    pub fn new(oracle: Arc<dyn OracleGateway>) -> Self {
        Self { oracle }
    }

    pub async fn execute(&self, input: GenerateImageInput) -> Result<ImageAsset, GenerateImageError> {
        info!(
            "Generating {} image for: {}",
            input.resolution,
            input.prompt.preview(100)
        );

        let payload = self
            .oracle
            .generate_image(&input.models.image, &input.prompt, input.resolution)
            .await?;

        debug!("Image response carried {} parts", payload.parts.len());

        let asset = payload
            .into_first_asset()
            .ok_or(GenerateImageError::NoImage)?;

        info!(
            "Generated {} image ({} bytes)",
            asset.mime_type(),
            asset.bytes().len()
        );

        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::oracle::OracleConversation;
    use async_trait::async_trait;
    use muse_domain::{ConversationTurn, ImagePart, ImagePayload, Model, ResponseSchema};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockOracle {
        responses: Mutex<VecDeque<Result<ImagePayload, OracleError>>>,
        seen_resolutions: Mutex<Vec<ResolutionTier>>,
    }

    impl MockOracle {
        fn new(responses: Vec<Result<ImagePayload, OracleError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                seen_resolutions: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl OracleGateway for MockOracle {
        async fn generate_structured(
            &self,
            _model: &Model,
            _instruction: &str,
            _schema: &ResponseSchema,
        ) -> Result<String, OracleError> {
            unimplemented!("not used by image tests")
        }

        async fn generate_image(
            &self,
            _model: &Model,
            _prompt: &Prompt,
            resolution: ResolutionTier,
        ) -> Result<ImagePayload, OracleError> {
            self.seen_resolutions.lock().unwrap().push(resolution);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(OracleError::EmptyResponse))
        }

        async fn start_conversation(
            &self,
            _model: &Model,
            _persona: &str,
            _history: &[ConversationTurn],
        ) -> Result<Box<dyn OracleConversation>, OracleError> {
            unimplemented!("not used by image tests")
        }
    }

    fn input(prompt: &str, resolution: ResolutionTier) -> GenerateImageInput {
        GenerateImageInput::new(Prompt::new(prompt), resolution, ModelConfig::default())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_inline_part_becomes_asset() {
        let payload = ImagePayload::from_parts(vec![
            ImagePart::Text("Here you go:".to_string()),
            ImagePart::Inline {
                mime_type: "image/png".to_string(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            },
        ]);
        let oracle = Arc::new(MockOracle::new(vec![Ok(payload)]));
        let use_case = GenerateImageUseCase::new(oracle.clone());

        let asset = use_case
            .execute(input("blue guitar", ResolutionTier::Medium))
            .await
            .unwrap();

        assert_eq!(asset.mime_type(), "image/png");
        assert!(!asset.bytes().is_empty());
        assert_eq!(
            oracle.seen_resolutions.lock().unwrap().as_slice(),
            &[ResolutionTier::Medium]
        );
    }

    #[tokio::test]
    async fn test_text_only_response_yields_no_asset() {
        let payload =
            ImagePayload::from_parts(vec![ImagePart::Text("I cannot draw that.".to_string())]);
        let oracle = Arc::new(MockOracle::new(vec![Ok(payload)]));
        let use_case = GenerateImageUseCase::new(oracle);

        let err = use_case
            .execute(input("blue guitar", ResolutionTier::Low))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateImageError::NoImage));
    }

    #[tokio::test]
    async fn test_oracle_no_image_part_is_surfaced() {
        let oracle = Arc::new(MockOracle::new(vec![Err(OracleError::NoImagePart)]));
        let use_case = GenerateImageUseCase::new(oracle);

        let err = use_case
            .execute(input("blue guitar", ResolutionTier::High))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateImageError::Oracle(OracleError::NoImagePart)
        ));
    }

    #[tokio::test]
    async fn test_mime_type_comes_from_oracle() {
        let payload = ImagePayload::from_parts(vec![ImagePart::Inline {
            mime_type: "image/webp".to_string(),
            bytes: vec![1, 2, 3],
        }]);
        let oracle = Arc::new(MockOracle::new(vec![Ok(payload)]));
        let use_case = GenerateImageUseCase::new(oracle);

        let asset = use_case
            .execute(input("a cello made of rain", ResolutionTier::Low))
            .await
            .unwrap();
        assert_eq!(asset.mime_type(), "image/webp");
        assert_eq!(asset.extension(), "webp");
    }
}
