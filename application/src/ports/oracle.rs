//! Oracle gateway port
//!
//! Defines the interface for delegating to the generative backend.

use async_trait::async_trait;
use muse_domain::{ConversationTurn, ImagePayload, Model, Prompt, ResolutionTier, ResponseSchema};
use thiserror::Error;

/// Errors that can occur during oracle operations
#[derive(Error, Debug)]
pub enum OracleError {
    /// Transport, auth, quota, or backend failure. The detail string is
    /// for operators; callers only branch on the category.
    #[error("Oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle answered but produced no usable content.
    #[error("Oracle returned no content")]
    EmptyResponse,

    /// An image request came back without any image data.
    #[error("Oracle returned no image data")]
    NoImagePart,
}

/// Gateway to the generative backend
///
/// This port defines how the application layer reaches the oracle.
/// Implementations (adapters) live in the infrastructure layer. No method
/// retries on its own; every failure surfaces to the caller.
#[async_trait]
pub trait OracleGateway: Send + Sync {
    /// Request output constrained to `schema`, returning the raw JSON text.
    ///
    /// Schema-guided generation is an external contract, not a guarantee:
    /// callers must validate the returned text before trusting it.
    async fn generate_structured(
        &self,
        model: &Model,
        instruction: &str,
        schema: &ResponseSchema,
    ) -> Result<String, OracleError>;

    /// Request artwork for `prompt` at the given resolution.
    ///
    /// Implementations fail with [`OracleError::NoImagePart`] when the
    /// backend answers without any inline image data.
    async fn generate_image(
        &self,
        model: &Model,
        prompt: &Prompt,
        resolution: ResolutionTier,
    ) -> Result<ImagePayload, OracleError>;

    /// Open a conversation seeded with prior turns.
    ///
    /// The seed is the caller's transcript up to, but not including, the
    /// message about to be sent.
    async fn start_conversation(
        &self,
        model: &Model,
        persona: &str,
        history: &[ConversationTurn],
    ) -> Result<Box<dyn OracleConversation>, OracleError>;
}

/// An open tutor conversation
#[async_trait]
pub trait OracleConversation: Send + Sync {
    /// Get the model used by this conversation
    fn model(&self) -> &Model;

    /// Send one user message and return the assistant's reply text.
    ///
    /// The reply may be empty; callers decide whether that is an error.
    async fn send(&self, text: &str) -> Result<String, OracleError>;
}
