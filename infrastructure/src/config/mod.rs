//! Configuration infrastructure
//!
//! File format and layered loading for `muse.toml`.

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileApiConfig, FileConfig, FileImageConfig, FileModelsConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
