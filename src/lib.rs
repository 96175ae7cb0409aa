//! oauth-openapi Library
//!
//! OpenAPI v2 and v3 documentation configuration for the OpenShift OAuth API
//! server, plus the tooling to load type registries and generated definitions
//! and render documentation skeletons from them.

pub mod cli;
pub mod config;
pub mod utils;

pub use config::{Config, OutputConfig, OutputFormat, RegistryConfig};
pub use oauth_openapi_config::{
    build_v2_config, build_v3_config, ConfigError, DefinitionNameResolver, DefinitionsError,
    DefinitionsProvider, FileDefinitions, OpenApiConfig, OpenApiV3Config,
};
pub use oauth_openapi_scheme::{DefinitionNamer, TypeRegistry};
pub use oauth_openapi_spec::{Extensions, Info, OpenApiDefinition, Ref, Schema};

use oauth_openapi_config::render;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// OpenAPI document version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenApiVersion {
    /// OpenAPI 2.0 (Swagger)
    V2,
    /// OpenAPI 3.0
    V3,
}

impl FromStr for OpenApiVersion {
    type Err = OAuthOpenApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v2" | "2" | "swagger" => Ok(Self::V2),
            "v3" | "3" => Ok(Self::V3),
            other => Err(OAuthOpenApiError::Config(format!(
                "Unknown OpenAPI version: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OpenApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => f.write_str("v2"),
            Self::V3 => f.write_str("v3"),
        }
    }
}

/// Main application context holding the loaded capabilities
pub struct OAuthOpenApi {
    config: Config,
    namer: Arc<DefinitionNamer>,
    definitions: Arc<FileDefinitions>,
}

impl OAuthOpenApi {
    /// Load registries and definitions described by the configuration
    pub fn new(config: Config) -> OAuthOpenApiResult<Self> {
        let registries = config.registries.registries();
        let namer = DefinitionNamer::new(registries.iter());
        info!(
            "Indexed {} registered types from {} registries",
            namer.len(),
            registries.len()
        );

        let definitions = match &config.definitions {
            Some(path) => {
                let path = utils::expand_path(path)?;
                FileDefinitions::from_path(&path).map_err(ConfigError::from)?
            }
            None => {
                warn!("No definitions file configured, documents will have no schemas");
                FileDefinitions::default()
            }
        };

        let missing = definitions.missing_dependencies();
        if !missing.is_empty() {
            warn!(
                "{} definition dependencies are missing, first is {}",
                missing.len(),
                missing[0]
            );
        }

        Ok(Self {
            config,
            namer: Arc::new(namer),
            definitions: Arc::new(definitions),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn namer(&self) -> &DefinitionNamer {
        &self.namer
    }

    pub fn definitions(&self) -> &FileDefinitions {
        &self.definitions
    }

    /// OpenAPI v2 configuration backed by the loaded capabilities
    pub fn v2_config(&self) -> OpenApiConfig {
        build_v2_config(self.definitions.clone(), self.namer.clone())
    }

    /// OpenAPI v3 configuration backed by the loaded capabilities
    pub fn v3_config(&self) -> OAuthOpenApiResult<OpenApiV3Config> {
        Ok(build_v3_config(self.definitions.clone(), self.namer.clone())?)
    }

    /// Render the documentation skeleton for a version, serialized per the
    /// output configuration
    pub fn render(&self, version: OpenApiVersion) -> OAuthOpenApiResult<String> {
        self.render_with(version, &self.config.output)
    }

    pub fn render_with(
        &self,
        version: OpenApiVersion,
        output: &OutputConfig,
    ) -> OAuthOpenApiResult<String> {
        info!("Rendering OpenAPI {} document as {}", version, output.format);
        let rendered = match version {
            OpenApiVersion::V2 => output.serialize(&render::swagger_document(&self.v2_config())?),
            OpenApiVersion::V3 => output.serialize(&render::openapi_document(&self.v3_config()?)),
        };
        rendered.map_err(|e| OAuthOpenApiError::Serialization(e.to_string()))
    }
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum OAuthOpenApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OpenAPI configuration failed: {0}")]
    OpenApi(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for the main application
pub type OAuthOpenApiResult<T> = Result<T, OAuthOpenApiError>;
