//! Music theory visualization data.

pub mod entities;
pub mod parser;

pub use entities::{Instrument, TheoryKind, Visualization};
pub use parser::{parse_visualization, TheoryDataError};
