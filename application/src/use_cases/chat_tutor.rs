//! Tutor chat use case.
//!
//! Owns the conversation state for the music theory tutor: an append-only
//! [`Transcript`] plus at most one live backend session. The session is
//! created lazily on the first send and recreated, seeded with the
//! transcript, after any failure.
//!
//! State machine per send:
//!
//! ```text
//! NoSession --send--> create(seed = transcript) --ok--> Active
//! Active    --send--> reply ok   --> stays Active, turn recorded
//! Active    --send--> any error  --> NoSession, user turn kept
//! any state --reset-->           --> NoSession, transcript cleared
//! ```
//!
//! `send` takes `&mut self`, so a caller cannot overlap two turns; strict
//! turn ordering is enforced by the borrow checker rather than a lock.

use crate::ports::oracle::{OracleConversation, OracleError, OracleGateway};
use muse_domain::{ConversationTurn, Model, ModelConfig, Transcript, TUTOR_PERSONA};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a chat turn.
///
/// After any of these, the backend session handle is unset and the next
/// send starts fresh, seeded with the transcript so far.
#[derive(Error, Debug)]
pub enum ChatTutorError {
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("The tutor returned an empty reply")]
    EmptyReply,
}

/// Use case for a multi-turn conversation with the tutor.
///
/// The transcript belongs to this use case, not to the backend: a failed
/// turn drops only the session handle, never recorded history.
pub struct ChatTutorUseCase {
    oracle: Arc<dyn OracleGateway>,
    models: ModelConfig,
    transcript: Transcript,
    conversation: Option<Box<dyn OracleConversation>>,
}

impl ChatTutorUseCase {
    pub fn new(oracle: Arc<dyn OracleGateway>, models: ModelConfig) -> Self {
        Self {
            oracle,
            models,
            transcript: Transcript::new(),
            conversation: None,
        }
    }

    /// The conversation history recorded so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The model the tutor conversation addresses.
    pub fn model(&self) -> &Model {
        &self.models.chat
    }

    /// Whether a backend session is currently open.
    pub fn has_session(&self) -> bool {
        self.conversation.is_some()
    }

    /// Send one user message and return the tutor's reply.
    ///
    /// The user turn is recorded even when the exchange fails, so a later
    /// retry reads naturally in the reseeded session.
    pub async fn send(&mut self, text: &str) -> Result<String, ChatTutorError> {
        info!("Chat turn {} starting", self.transcript.len() / 2 + 1);

        // Reuse the live session, or open one seeded with every turn
        // recorded before this message.
        let conversation = match self.conversation.take() {
            Some(conversation) => conversation,
            None => {
                debug!(
                    "Opening tutor session with {} seed turns",
                    self.transcript.len()
                );
                match self
                    .oracle
                    .start_conversation(&self.models.chat, TUTOR_PERSONA, self.transcript.turns())
                    .await
                {
                    Ok(conversation) => conversation,
                    Err(e) => {
                        warn!("Failed to open tutor session: {}", e);
                        self.transcript.push(ConversationTurn::user(text));
                        return Err(e.into());
                    }
                }
            }
        };

        self.transcript.push(ConversationTurn::user(text));

        // The handle is only put back on success; any failure below leaves
        // it unset, and the next send reseeds from the transcript.
        match conversation.send(text).await {
            Ok(reply) if reply.trim().is_empty() => {
                warn!("Tutor returned an empty reply; dropping session");
                Err(ChatTutorError::EmptyReply)
            }
            Ok(reply) => {
                debug!("Tutor replied with {} bytes", reply.len());
                self.transcript.push(ConversationTurn::assistant(&reply));
                self.conversation = Some(conversation);
                Ok(reply)
            }
            Err(e) => {
                warn!("Chat turn failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// Forget the session and the transcript, returning to the initial state.
    pub fn reset(&mut self) {
        info!(
            "Resetting tutor conversation ({} turns discarded)",
            self.transcript.len()
        );
        self.conversation = None;
        self.transcript.clear();
    }
}
