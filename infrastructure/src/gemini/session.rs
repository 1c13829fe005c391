//! Gemini chat session implementation
//!
//! Wraps the `generateContent` endpoint to implement the
//! `OracleConversation` trait. Manages conversation history locally
//! since the REST API is stateless.

use super::protocol::{Content, GenerateContentRequest};
use super::transport::Transport;
use async_trait::async_trait;
use muse_application::ports::oracle::{OracleConversation, OracleError};
use muse_domain::{ConversationTurn, Model, Role};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct GeminiConversation {
    transport: Arc<Transport>,
    model: Model,
    persona: String,
    /// Conversation history (stateless API requires full history each call)
    history: Mutex<Vec<Content>>,
}

impl GeminiConversation {
    pub(super) fn new(
        transport: Arc<Transport>,
        model: Model,
        persona: &str,
        turns: &[ConversationTurn],
    ) -> Self {
        let history = turns.iter().map(content_from_turn).collect();
        Self {
            transport,
            model,
            persona: persona.to_string(),
            history: Mutex::new(history),
        }
    }

    fn system_content(&self) -> Option<Content> {
        if self.persona.is_empty() {
            None
        } else {
            Some(Content::system(&self.persona))
        }
    }
}

/// Map a transcript turn to the wire roles Gemini expects. Assistant
/// turns are `"model"` on the wire.
fn content_from_turn(turn: &ConversationTurn) -> Content {
    match turn.role {
        Role::User => Content::user(&turn.text),
        Role::Assistant => Content::model(&turn.text),
    }
}

#[async_trait]
impl OracleConversation for GeminiConversation {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, text: &str) -> Result<String, OracleError> {
        let mut history = self.history.lock().await;
        history.push(Content::user(text));

        let request = GenerateContentRequest {
            contents: history.clone(),
            system_instruction: self.system_content(),
            generation_config: None,
        };

        let response = self.transport.generate(&self.model, &request).await?;
        let reply = response.into_text();

        // Record the model turn so the next call carries it
        if !reply.is_empty() {
            history.push(Content::model(&reply));
        }

        Ok(reply)
    }
}
