//! Presentation layer for muse-ai
//!
//! This crate contains CLI definitions, output formatters, the busy
//! spinner, and the interactive tutor chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::Spinner;
