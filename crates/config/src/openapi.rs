//! v2 and v3 configuration values and their builders

use crate::capability::{DefinitionNameResolver, Definitions, DefinitionsProvider};
use crate::error::ConfigError;
use crate::info::{
    self, BEARER_TOKEN, BEARER_TOKEN_DESCRIPTION, BEARER_TOKEN_HEADER,
    DEFAULT_RESPONSE_DESCRIPTION,
};
use oauth_openapi_spec::swagger::{self, SecurityDefinitions};
use oauth_openapi_spec::spec3::{self, SecuritySchemes};
use oauth_openapi_spec::{Info, Ref};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

const GENERIC_API_SERVER_TITLE: &str = "Generic API Server";

/// OpenAPI v2 (Swagger) configuration
#[derive(Clone)]
pub struct OpenApiConfig {
    protocol_list: Vec<String>,
    get_definitions: Arc<dyn DefinitionsProvider>,
    ignore_prefixes: Vec<String>,
    get_definition_name: Arc<dyn DefinitionNameResolver>,
    info: Info,
    default_response: swagger::Response,
    security_definitions: SecurityDefinitions,
}

impl OpenApiConfig {
    /// Transport protocols advertised in the `schemes` field
    pub fn protocol_list(&self) -> &[String] {
        &self.protocol_list
    }

    pub fn definitions_provider(&self) -> &Arc<dyn DefinitionsProvider> {
        &self.get_definitions
    }

    pub fn ignore_prefixes(&self) -> &[String] {
        &self.ignore_prefixes
    }

    pub fn name_resolver(&self) -> &Arc<dyn DefinitionNameResolver> {
        &self.get_definition_name
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    /// Response documented for operations without an explicit one
    pub fn default_response(&self) -> &swagger::Response {
        &self.default_response
    }

    pub fn security_definitions(&self) -> &SecurityDefinitions {
        &self.security_definitions
    }

    /// Whether a path is excluded from the documentation
    pub fn is_ignored(&self, path: &str) -> bool {
        is_ignored(&self.ignore_prefixes, path)
    }

    /// Invoke the definitions provider with `#/definitions/` references
    ///
    /// Unlike [`resolve_definitions`](Self::resolve_definitions) this fails
    /// when two provided types share a definition name, as the v3 builder does.
    pub fn checked_definitions(&self) -> Result<Definitions, ConfigError> {
        let definitions = self.resolve_definitions();
        check_definition_names(&definitions, &*self.get_definition_name)?;
        Ok(definitions)
    }

    /// Invoke the definitions provider with `#/definitions/` references
    pub fn resolve_definitions(&self) -> Definitions {
        let resolver = &self.get_definition_name;
        self.get_definitions.definitions(&|name: &str| {
            let (definition_name, _) = resolver.definition_name(name);
            Ref::definition(&definition_name)
        })
    }
}

impl fmt::Debug for OpenApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenApiConfig")
            .field("protocol_list", &self.protocol_list)
            .field("ignore_prefixes", &self.ignore_prefixes)
            .field("info", &self.info)
            .field("default_response", &self.default_response)
            .field("security_definitions", &self.security_definitions)
            .finish_non_exhaustive()
    }
}

/// OpenAPI v3 configuration
#[derive(Clone)]
pub struct OpenApiV3Config {
    info: Info,
    ignore_prefixes: Vec<String>,
    default_response: spec3::Response,
    get_definition_name: Arc<dyn DefinitionNameResolver>,
    get_definitions: Arc<dyn DefinitionsProvider>,
    definitions: Definitions,
    security_schemes: SecuritySchemes,
}

impl OpenApiV3Config {
    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn ignore_prefixes(&self) -> &[String] {
        &self.ignore_prefixes
    }

    pub fn default_response(&self) -> &spec3::Response {
        &self.default_response
    }

    pub fn name_resolver(&self) -> &Arc<dyn DefinitionNameResolver> {
        &self.get_definition_name
    }

    pub fn definitions_provider(&self) -> &Arc<dyn DefinitionsProvider> {
        &self.get_definitions
    }

    /// Definitions resolved with `#/components/schemas/` references
    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn security_schemes(&self) -> &SecuritySchemes {
        &self.security_schemes
    }

    /// Whether a path is excluded from the documentation
    pub fn is_ignored(&self, path: &str) -> bool {
        is_ignored(&self.ignore_prefixes, path)
    }
}

impl fmt::Debug for OpenApiV3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenApiV3Config")
            .field("info", &self.info)
            .field("ignore_prefixes", &self.ignore_prefixes)
            .field("default_response", &self.default_response)
            .field("definitions", &self.definitions.len())
            .field("security_schemes", &self.security_schemes)
            .finish_non_exhaustive()
    }
}

fn is_ignored(prefixes: &[String], path: &str) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

/// Every provided type must resolve to a distinct, non-empty definition name
pub(crate) fn check_definition_names(
    definitions: &Definitions,
    resolver: &dyn DefinitionNameResolver,
) -> Result<(), ConfigError> {
    let mut named: BTreeMap<String, &str> = BTreeMap::new();
    for type_name in definitions.keys() {
        let (definition_name, _) = resolver.definition_name(type_name);
        if definition_name.is_empty() {
            return Err(ConfigError::EmptyDefinitionName {
                type_name: type_name.clone(),
            });
        }
        if let Some(first) = named.insert(definition_name.clone(), type_name.as_str()) {
            return Err(ConfigError::DuplicateDefinitionName {
                name: definition_name,
                first: first.to_string(),
                second: type_name.clone(),
            });
        }
    }
    Ok(())
}

/// Framework default v3 configuration
///
/// Definitions are resolved immediately, with every reference pointing into
/// `#/components/schemas/`. Fails when the resolver yields an empty name or
/// maps two provided types onto the same definition.
pub fn default_v3_config(
    get_definitions: Arc<dyn DefinitionsProvider>,
    get_definition_name: Arc<dyn DefinitionNameResolver>,
) -> Result<OpenApiV3Config, ConfigError> {
    let unnamed = RefCell::new(Vec::new());
    let definitions = get_definitions.definitions(&|name: &str| {
        let (definition_name, _) = get_definition_name.definition_name(name);
        if definition_name.is_empty() {
            unnamed.borrow_mut().push(name.to_string());
        }
        Ref::component_schema(&definition_name)
    });

    if let Some(type_name) = unnamed.into_inner().into_iter().next() {
        return Err(ConfigError::EmptyDefinitionName { type_name });
    }

    check_definition_names(&definitions, &*get_definition_name)?;

    debug!("Resolved {} OpenAPI v3 definitions", definitions.len());

    Ok(OpenApiV3Config {
        info: Info::titled(GENERIC_API_SERVER_TITLE),
        ignore_prefixes: Vec::new(),
        default_response: spec3::Response {
            description: DEFAULT_RESPONSE_DESCRIPTION.to_string(),
        },
        get_definition_name,
        get_definitions,
        definitions,
        security_schemes: SecuritySchemes::new(),
    })
}

/// OpenAPI v2 configuration for the OAuth API server
pub fn build_v2_config(
    get_definitions: Arc<dyn DefinitionsProvider>,
    get_definition_name: Arc<dyn DefinitionNameResolver>,
) -> OpenApiConfig {
    let mut security_definitions = SecurityDefinitions::new();
    security_definitions.insert(
        BEARER_TOKEN.to_string(),
        swagger::SecurityScheme::api_key_header(BEARER_TOKEN_HEADER, BEARER_TOKEN_DESCRIPTION),
    );

    OpenApiConfig {
        protocol_list: vec!["https".to_string()],
        get_definitions,
        ignore_prefixes: info::ignore_prefixes(),
        get_definition_name,
        info: info::spec_info(),
        default_response: swagger::Response {
            description: DEFAULT_RESPONSE_DESCRIPTION.to_string(),
        },
        security_definitions,
    }
}

/// OpenAPI v3 configuration for the OAuth API server
///
/// Errors from [`default_v3_config`] are returned unchanged.
pub fn build_v3_config(
    get_definitions: Arc<dyn DefinitionsProvider>,
    get_definition_name: Arc<dyn DefinitionNameResolver>,
) -> Result<OpenApiV3Config, ConfigError> {
    let mut config = default_v3_config(get_definitions, get_definition_name)?;
    config.info = info::spec_info();
    config.ignore_prefixes = info::ignore_prefixes();
    config.security_schemes = SecuritySchemes::from([(
        BEARER_TOKEN.to_string(),
        spec3::SecurityScheme::api_key_header(BEARER_TOKEN_HEADER, BEARER_TOKEN_DESCRIPTION),
    )]);
    Ok(config)
}
