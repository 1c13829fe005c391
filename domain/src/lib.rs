//! Domain layer for muse-ai
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Visualization**: typed music-theory data (scale, chord, or interval)
//!   with parallel note and interval-label lists, parsed atomically from
//!   oracle output.
//! - **Transcript**: the append-only history of a tutor conversation. It
//!   belongs to the client, not the backend, so a conversation survives
//!   backend session resets.
//! - **ImagePayload / ImageAsset**: the mixed text-and-binary response of
//!   the image oracle and the single decoded image kept from it.

pub mod core;
pub mod image;
pub mod instructions;
pub mod schema;
pub mod session;
pub mod theory;

// Re-export commonly used types
pub use core::{
    model::{Model, ModelConfig},
    prompt::Prompt,
};
pub use image::{ImageAsset, ImagePart, ImagePayload, ResolutionTier};
pub use instructions::{theory_instruction, TUTOR_PERSONA};
pub use schema::{FieldKind, ResponseSchema, SchemaField};
pub use session::entities::{ConversationTurn, Role, Transcript};
pub use theory::{
    entities::{Instrument, TheoryKind, Visualization},
    parser::{parse_visualization, TheoryDataError},
};
