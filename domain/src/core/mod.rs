//! Core domain concepts shared by every adapter

pub mod model;
pub mod prompt;
