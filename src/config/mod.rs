//! Configuration management for oauth-openapi

pub mod config;
pub mod output;
pub mod registries;


// Re-export main types for convenience
pub use config::{Config, CONFIG_FILE_NAMES};
pub use output::{OutputConfig, OutputFormat};
pub use registries::RegistryConfig;
