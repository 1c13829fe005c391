//! Port definitions for the application layer.
//!
//! Ports are the seams between use cases and the outside world.
//! Adapters implementing them live in the infrastructure layer.

pub mod oracle;

pub use oracle::{OracleConversation, OracleError, OracleGateway};
