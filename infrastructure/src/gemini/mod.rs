//! Gemini REST adapter
//!
//! Implements the oracle ports against the `generateContent` endpoint.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod schema;
pub mod session;
pub mod transport;
