//! Error types

use std::path::PathBuf;

/// Errors raised while assembling a configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("definition name resolved for type {type_name} is empty")]
    EmptyDefinitionName { type_name: String },

    #[error("types {first} and {second} both resolve to definition {name}")]
    DuplicateDefinitionName {
        name: String,
        first: String,
        second: String,
    },

    #[error("Definitions error: {0}")]
    Definitions(#[from] DefinitionsError),
}

/// Errors raised while loading generated definitions
#[derive(thiserror::Error, Debug)]
pub enum DefinitionsError {
    #[error("failed to read definitions from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON definitions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML definitions: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
