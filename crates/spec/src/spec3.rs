//! OpenAPI v3 document fragments

use crate::types::{Info, Schema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crate::swagger::ApiKeyLocation;

/// Security scheme kinds understood by OpenAPI 3.0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecuritySchemeType {
    #[serde(rename = "apiKey")]
    ApiKey,
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "oauth2")]
    OAuth2,
    #[serde(rename = "openIdConnect")]
    OpenIdConnect,
}

/// Security scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: SecuritySchemeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ApiKeyLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// HTTP auth scheme for `http` schemes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
}

impl SecurityScheme {
    /// API key carried in a request header
    pub fn api_key_header(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            scheme_type: SecuritySchemeType::ApiKey,
            name: Some(name.into()),
            location: Some(ApiKeyLocation::Header),
            description: Some(description.into()),
            scheme: None,
            bearer_format: None,
        }
    }
}

/// Security schemes keyed by scheme name
pub type SecuritySchemes = BTreeMap<String, SecurityScheme>;

/// Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
}

/// Components (v3)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub schemas: BTreeMap<String, Schema>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub security_schemes: SecuritySchemes,
}

/// OpenAPI 3.0 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,

    pub info: Info,

    /// Paths are filled in by the serving framework
    #[serde(default)]
    pub paths: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    pub components: Components,
}

impl OpenApiDocument {
    pub fn new(info: Info) -> Self {
        Self {
            openapi: "3.0.0".to_string(),
            info,
            paths: BTreeMap::new(),
            components: Components::default(),
        }
    }
}
