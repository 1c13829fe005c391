//! Infrastructure layer for muse-ai
//!
//! External adapters: the Gemini REST oracle and configuration file
//! loading. This layer implements the ports defined in the application
//! layer.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use gemini::error::GeminiError;
pub use gemini::gateway::GeminiGateway;
