//! Configuration file format
//!
//! Serde structures for `muse.toml` and the global config file. Every
//! section is optional; unset fields fall back to built-in defaults.

use muse_domain::{Model, ModelConfig, ResolutionTier};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub models: FileModelsConfig,
    pub api: FileApiConfig,
    pub image: FileImageConfig,
    pub output: FileOutputConfig,
}

/// `[models]` section: which Gemini model serves each feature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for structured theory queries
    pub theory: Option<String>,
    /// Model for tutor chat sessions
    pub chat: Option<String>,
    /// Model for image generation
    pub image: Option<String>,
}

impl FileModelsConfig {
    /// Resolve the configured model names, falling back to the
    /// built-in default for each unset or blank entry.
    pub fn to_model_config(&self) -> ModelConfig {
        let mut config = ModelConfig::default();
        if let Some(model) = parse_model(&self.theory) {
            config = config.with_theory(model);
        }
        if let Some(model) = parse_model(&self.chat) {
            config = config.with_chat(model);
        }
        if let Some(model) = parse_model(&self.image) {
            config = config.with_image(model);
        }
        config
    }
}

fn parse_model(name: &Option<String>) -> Option<Model> {
    let name = name.as_deref()?.trim();
    if name.is_empty() {
        return None;
    }
    // Model::from_str is infallible; unknown names become Custom(...)
    Some(name.parse().unwrap())
}

/// `[api]` section: endpoint and credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// API key. The GEMINI_API_KEY environment variable takes
    /// precedence when set.
    pub key: Option<String>,
    /// Override for the generateContent endpoint base URL
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// `[image]` section: artwork generation defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageConfig {
    /// Resolution tier used when the command line does not pick one
    pub resolution: Option<ResolutionTier>,
    /// Directory generated artwork is written to. Defaults to the
    /// working directory.
    pub directory: Option<PathBuf>,
}

impl FileImageConfig {
    pub fn to_resolution(&self) -> ResolutionTier {
        self.resolution.unwrap_or_default()
    }
}

/// `[output]` section: terminal presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Colorize terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();

        let models = config.models.to_model_config();
        assert_eq!(models, ModelConfig::default());
        assert!(config.api.key.is_none());
        assert_eq!(config.image.to_resolution(), ResolutionTier::Low);
        assert!(config.output.color);
    }

    #[test]
    fn test_model_overrides_parse() {
        let toml = r#"
            [models]
            theory = "gemini-2.5-flash"
            chat = "gemini-exp"
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();

        let models = config.models.to_model_config();
        assert_eq!(models.theory, Model::Gemini25Flash);
        assert_eq!(models.chat, Model::Custom("gemini-exp".to_string()));
        assert_eq!(models.image, ModelConfig::default().image);
    }

    #[test]
    fn test_blank_model_name_is_ignored() {
        let toml = r#"
            [models]
            theory = "  "
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.models.to_model_config().theory, ModelConfig::default().theory);
    }

    #[test]
    fn test_api_section_parses() {
        let toml = r#"
            [api]
            key = "test-key"
            base_url = "http://localhost:8080/v1beta/models"
            timeout_secs = 30
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.api.key.as_deref(), Some("test-key"));
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://localhost:8080/v1beta/models")
        );
        assert_eq!(config.api.timeout_secs, Some(30));
    }

    #[test]
    fn test_image_resolution_parses() {
        let toml = r#"
            [image]
            resolution = "high"
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.image.to_resolution(), ResolutionTier::High);
        assert!(config.image.directory.is_none());
    }

    #[test]
    fn test_image_directory_parses() {
        let toml = r#"
            [image]
            directory = "artwork"
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.image.directory, Some(PathBuf::from("artwork")));
    }

    #[test]
    fn test_invalid_resolution_is_rejected() {
        let toml = r#"
            [image]
            resolution = "ultra"
        "#;
        assert!(toml::from_str::<FileConfig>(toml).is_err());
    }

    #[test]
    fn test_output_color_can_be_disabled() {
        let toml = r#"
            [output]
            color = false
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();
        assert!(!config.output.color);
    }
}
