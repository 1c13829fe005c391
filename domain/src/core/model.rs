//! Model value object for the Gemini backend

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative models the application can address (Value Object)
///
/// Each capability of the app is served by a different model family:
/// fast structured generation, conversational tutoring, and image synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Fast model used for schema-constrained theory data.
    Gemini25Flash,
    /// Conversational model used for the tutor chat.
    Gemini3Pro,
    /// Image-capable model used for artwork generation.
    Gemini3ProImage,
    /// Any other model identifier, passed through verbatim.
    Custom(String),
}

impl Model {
    /// Get the wire identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Gemini3ProImage => "gemini-3-pro-image-preview",
            Model::Custom(s) => s,
        }
    }

    /// Check if this model can return inline image data
    pub fn supports_images(&self) -> bool {
        matches!(self, Model::Gemini3ProImage)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            "gemini-3-pro-image-preview" => Model::Gemini3ProImage,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().expect("Model::from_str is infallible"))
    }
}

/// Role-based model selection.
///
/// Each adapter addresses its own model; the selection is fixed at
/// assembly time and never changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model for structured theory queries.
    pub theory: Model,
    /// Model for the tutor conversation.
    pub chat: Model,
    /// Model for image generation.
    pub image: Model,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            theory: Model::Gemini25Flash,
            chat: Model::Gemini3Pro,
            image: Model::Gemini3ProImage,
        }
    }
}

impl ModelConfig {
    pub fn with_theory(mut self, model: Model) -> Self {
        self.theory = model;
        self
    }

    pub fn with_chat(mut self, model: Model) -> Self {
        self.chat = model;
        self
    }

    pub fn with_image(mut self, model: Model) -> Self {
        self.image = model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::Gemini25Flash, Model::Gemini3Pro, Model::Gemini3ProImage] {
            let s = model.to_string();
            let parsed: Model = s.parse().expect("infallible");
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-experimental".parse().expect("infallible");
        assert_eq!(model, Model::Custom("gemini-experimental".to_string()));
        assert_eq!(model.to_string(), "gemini-experimental");
    }

    #[test]
    fn test_image_capability() {
        assert!(Model::Gemini3ProImage.supports_images());
        assert!(!Model::Gemini25Flash.supports_images());
        assert!(!Model::Gemini3Pro.supports_images());
    }

    #[test]
    fn test_default_roles() {
        let config = ModelConfig::default();
        assert_eq!(config.theory, Model::Gemini25Flash);
        assert_eq!(config.chat, Model::Gemini3Pro);
        assert_eq!(config.image, Model::Gemini3ProImage);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ModelConfig::default().with_chat(Model::Custom("tuned-tutor".into()));
        assert_eq!(config.chat, Model::Custom("tuned-tutor".to_string()));
        assert_eq!(config.theory, Model::Gemini25Flash);
    }
}
