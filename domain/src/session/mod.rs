//! Tutor conversation state.

pub mod entities;

pub use entities::{ConversationTurn, Role, Transcript};
