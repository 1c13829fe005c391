//! Image generation results.
//!
//! The image oracle answers with a mixed sequence of parts: optional
//! commentary text and one or more inline binary images. [`ImagePayload`]
//! models that sequence; [`ImageAsset`] is the single decoded image a
//! caller keeps once extraction succeeds.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output resolution for generated artwork
///
/// Tiers map onto the size labels the image backend understands
/// ("1K", "2K", "4K"). Low is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionTier {
    Low,
    Medium,
    High,
}

impl Default for ResolutionTier {
    fn default() -> Self {
        Self::Low
    }
}

impl ResolutionTier {
    /// The size label sent to the image backend
    pub fn image_size(&self) -> &'static str {
        match self {
            ResolutionTier::Low => "1K",
            ResolutionTier::Medium => "2K",
            ResolutionTier::High => "4K",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionTier::Low => "low",
            ResolutionTier::Medium => "medium",
            ResolutionTier::High => "high",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResolutionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" | "1k" => Ok(Self::Low),
            "medium" | "med" | "2k" => Ok(Self::Medium),
            "high" | "4k" => Ok(Self::High),
            _ => Err(format!(
                "unknown resolution tier: {s}. Valid: low, medium, high"
            )),
        }
    }
}

/// A single part of an image oracle response.
///
/// # Examples
///
/// ```
/// use muse_domain::image::ImagePart;
///
/// let caption = ImagePart::Text("A grand piano at dusk".to_string());
/// assert!(caption.as_text().is_some());
///
/// let image = ImagePart::Inline {
///     mime_type: "image/png".to_string(),
///     bytes: vec![0x89, 0x50, 0x4e, 0x47],
/// };
/// assert!(image.as_inline().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePart {
    /// Commentary text accompanying the image.
    Text(String),

    /// Decoded binary image data.
    Inline {
        /// MIME type reported by the backend (e.g. "image/png").
        mime_type: String,
        /// Raw image bytes, already base64-decoded.
        bytes: Vec<u8>,
    },
}

impl ImagePart {
    /// Returns the text if this is a `Text` part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ImagePart::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `(mime_type, bytes)` if this is an `Inline` part.
    pub fn as_inline(&self) -> Option<(&str, &[u8])> {
        match self {
            ImagePart::Inline { mime_type, bytes } => Some((mime_type, bytes)),
            _ => None,
        }
    }
}

/// Everything the image oracle returned for one prompt.
///
/// # Examples
///
/// ```
/// use muse_domain::image::{ImagePart, ImagePayload};
///
/// let payload = ImagePayload::from_parts(vec![
///     ImagePart::Text("Here is your artwork:".to_string()),
///     ImagePart::Inline {
///         mime_type: "image/png".to_string(),
///         bytes: vec![1, 2, 3],
///     },
/// ]);
/// assert!(payload.has_inline());
/// assert_eq!(payload.first_inline().unwrap().0, "image/png");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePayload {
    /// Parts in the order the backend produced them.
    pub parts: Vec<ImagePart>,
}

impl ImagePayload {
    pub fn from_parts(parts: Vec<ImagePart>) -> Self {
        Self { parts }
    }

    /// Returns `true` if any part carries binary image data.
    pub fn has_inline(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, ImagePart::Inline { .. }))
    }

    /// The first binary image part, if any.
    pub fn first_inline(&self) -> Option<(&str, &[u8])> {
        self.parts.iter().find_map(|p| p.as_inline())
    }

    /// Consume the payload and keep the first image as an [`ImageAsset`].
    pub fn into_first_asset(self) -> Option<ImageAsset> {
        self.parts.into_iter().find_map(|p| match p {
            ImagePart::Inline { mime_type, bytes } => Some(ImageAsset::new(mime_type, bytes)),
            _ => None,
        })
    }

    /// Concatenate all text parts into a single string.
    pub fn text_content(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.as_text())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// A generated image ready to present or save (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    mime_type: String,
    bytes: Vec<u8>,
}

impl ImageAsset {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Render the image as a `data:` URI for embedding.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            BASE64.encode(&self.bytes)
        )
    }

    /// File extension matching the MIME type. Unknown types fall back to
    /// "png", which is what the backend produces in practice.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_image_sizes() {
        assert_eq!(ResolutionTier::Low.image_size(), "1K");
        assert_eq!(ResolutionTier::Medium.image_size(), "2K");
        assert_eq!(ResolutionTier::High.image_size(), "4K");
        assert_eq!(ResolutionTier::default(), ResolutionTier::Low);
    }

    #[test]
    fn tier_from_str_accepts_names_and_sizes() {
        assert_eq!("medium".parse::<ResolutionTier>().unwrap(), ResolutionTier::Medium);
        assert_eq!("4K".parse::<ResolutionTier>().unwrap(), ResolutionTier::High);
        assert_eq!("1k".parse::<ResolutionTier>().unwrap(), ResolutionTier::Low);
        assert!("ultra".parse::<ResolutionTier>().is_err());
    }

    #[test]
    fn payload_first_inline_skips_text() {
        let payload = ImagePayload::from_parts(vec![
            ImagePart::Text("Rendering...".to_string()),
            ImagePart::Inline {
                mime_type: "image/png".to_string(),
                bytes: vec![0x89, 0x50],
            },
            ImagePart::Inline {
                mime_type: "image/jpeg".to_string(),
                bytes: vec![0xff, 0xd8],
            },
        ]);

        let (mime, bytes) = payload.first_inline().unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, &[0x89, 0x50]);
        assert_eq!(payload.text_content(), "Rendering...");
    }

    #[test]
    fn payload_without_images() {
        let payload = ImagePayload::from_parts(vec![ImagePart::Text("Sorry.".to_string())]);
        assert!(!payload.has_inline());
        assert!(payload.first_inline().is_none());
        assert!(payload.into_first_asset().is_none());
    }

    #[test]
    fn into_first_asset_keeps_mime_and_bytes() {
        let payload = ImagePayload::from_parts(vec![ImagePart::Inline {
            mime_type: "image/jpeg".to_string(),
            bytes: vec![1, 2, 3],
        }]);

        let asset = payload.into_first_asset().unwrap();
        assert_eq!(asset.mime_type(), "image/jpeg");
        assert_eq!(asset.bytes(), &[1, 2, 3]);
        assert_eq!(asset.extension(), "jpg");
    }

    #[test]
    fn data_uri_encoding() {
        let asset = ImageAsset::new("image/png", vec![0x89, 0x50]);
        assert_eq!(asset.data_uri(), "data:image/png;base64,iVA=");
    }

    #[test]
    fn unknown_mime_defaults_to_png_extension() {
        let asset = ImageAsset::new("application/octet-stream", vec![]);
        assert_eq!(asset.extension(), "png");
    }
}
