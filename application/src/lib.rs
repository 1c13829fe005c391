//! Application layer for muse-ai
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::oracle::{OracleConversation, OracleError, OracleGateway};
pub use use_cases::chat_tutor::{ChatTutorError, ChatTutorUseCase};
pub use use_cases::generate_image::{GenerateImageError, GenerateImageInput, GenerateImageUseCase};
pub use use_cases::query_theory::{QueryTheoryError, QueryTheoryInput, QueryTheoryUseCase};
