//! Use cases orchestrating the oracle around domain rules.

pub mod chat_tutor;
pub mod generate_image;
pub mod query_theory;

pub use chat_tutor::{ChatTutorError, ChatTutorUseCase};
pub use generate_image::{GenerateImageError, GenerateImageInput, GenerateImageUseCase};
pub use query_theory::{QueryTheoryError, QueryTheoryInput, QueryTheoryUseCase};
