//! File configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, SourceConfig};
pub use loader::ConfigLoader;
