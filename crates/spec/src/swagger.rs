//! OpenAPI v2 (Swagger) document fragments

use crate::types::{Info, Schema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where an API key is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
    Query,
}

/// Security scheme kinds understood by Swagger 2.0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecuritySchemeType {
    #[serde(rename = "apiKey")]
    ApiKey,
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "oauth2")]
    OAuth2,
}

/// Security scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: SecuritySchemeType,

    /// Header or query parameter name for `apiKey` schemes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ApiKeyLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SecurityScheme {
    /// API key carried in a request header
    pub fn api_key_header(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            scheme_type: SecuritySchemeType::ApiKey,
            name: Some(name.into()),
            location: Some(ApiKeyLocation::Header),
            description: Some(description.into()),
        }
    }
}

/// Security definitions keyed by scheme name
pub type SecurityDefinitions = BTreeMap<String, SecurityScheme>;

/// Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
}

/// Swagger 2.0 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
    pub swagger: String,

    pub info: Info,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,

    /// Paths are filled in by the serving framework
    #[serde(default)]
    pub paths: BTreeMap<String, serde_json::Value>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub definitions: BTreeMap<String, Schema>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub security_definitions: SecurityDefinitions,
}

impl SwaggerDocument {
    pub fn new(info: Info) -> Self {
        Self {
            swagger: "2.0".to_string(),
            info,
            schemes: Vec::new(),
            paths: BTreeMap::new(),
            definitions: BTreeMap::new(),
            security_definitions: SecurityDefinitions::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_scheme_serialization() {
        let scheme = SecurityScheme::api_key_header("authorization", "Bearer Token authentication");
        let value = serde_json::to_value(&scheme).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "apiKey",
                "name": "authorization",
                "in": "header",
                "description": "Bearer Token authentication"
            })
        );
    }

    #[test]
    fn test_document_uses_swagger_field_names() {
        let mut doc = SwaggerDocument::new(Info::titled("test"));
        doc.security_definitions.insert(
            "BearerToken".to_string(),
            SecurityScheme::api_key_header("authorization", "token"),
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["swagger"], "2.0");
        assert!(value["securityDefinitions"]["BearerToken"].is_object());
        assert!(value["paths"].as_object().unwrap().is_empty());
        assert!(value.get("definitions").is_none());
        assert!(value.get("security").is_none());
    }
}
