//! OpenAPI configuration for the OAuth API server
//!
//! [`build_v2_config`] and [`build_v3_config`] assemble the values the serving
//! framework uses to document the OAuth-related APIs. Type naming and schema
//! generation are supplied by the caller through [`DefinitionNameResolver`] and
//! [`DefinitionsProvider`].

pub mod capability;
pub mod error;
pub mod file;
pub mod info;
pub mod openapi;
pub mod render;
pub mod version;

pub use capability::{Definitions, DefinitionNameResolver, DefinitionsProvider};
pub use error::{ConfigError, DefinitionsError};
pub use file::FileDefinitions;
pub use info::{spec_info, BEARER_TOKEN, IGNORE_PREFIXES, LICENSE_NAME, TITLE};
pub use openapi::{build_v2_config, build_v3_config, default_v3_config, OpenApiConfig, OpenApiV3Config};
pub use version::VersionInfo;
