//! Documentation skeletons rendered from a configuration
//!
//! Paths are left empty; only the parts a configuration determines are filled.

use crate::capability::{DefinitionNameResolver, Definitions};
use crate::error::ConfigError;
use crate::openapi::{OpenApiConfig, OpenApiV3Config};
use oauth_openapi_spec::spec3::OpenApiDocument;
use oauth_openapi_spec::swagger::SwaggerDocument;
use oauth_openapi_spec::Schema;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Swagger 2.0 document for a v2 configuration
///
/// Fails when two provided types resolve to the same definition name.
pub fn swagger_document(config: &OpenApiConfig) -> Result<SwaggerDocument, ConfigError> {
    let mut document = SwaggerDocument::new(config.info().clone());
    document.schemes = config.protocol_list().to_vec();
    document.definitions = named_schemas(config.checked_definitions()?, config.name_resolver());
    document.security_definitions = config.security_definitions().clone();
    debug!(
        "Rendered swagger document with {} definitions",
        document.definitions.len()
    );
    Ok(document)
}

/// OpenAPI 3.0 document for a v3 configuration
pub fn openapi_document(config: &OpenApiV3Config) -> OpenApiDocument {
    let mut document = OpenApiDocument::new(config.info().clone());
    document.components.schemas = named_schemas(
        config.definitions().clone(),
        config.name_resolver(),
    );
    document.components.security_schemes = config.security_schemes().clone();
    debug!(
        "Rendered OpenAPI v3 document with {} schemas",
        document.components.schemas.len()
    );
    document
}

/// Key schemas by definition name and attach the resolver's extensions
fn named_schemas(
    definitions: Definitions,
    resolver: &Arc<dyn DefinitionNameResolver>,
) -> BTreeMap<String, Schema> {
    definitions
        .into_iter()
        .map(|(type_name, definition)| {
            let (name, extensions) = resolver.definition_name(&type_name);
            let mut schema = definition.schema;
            schema.extensions.extend(extensions);
            (name, schema)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileDefinitions;
    use crate::openapi::{build_v2_config, build_v3_config};
    use oauth_openapi_scheme::{user_registry, DefinitionNamer, EXTENSION_GVK};

    const DEFINITIONS_YAML: &str = r#"
github.com/openshift/api/user/v1.User:
  schema:
    type: object
    properties:
      metadata:
        $ref: k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta
k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta:
  schema:
    type: object
"#;

    fn capabilities() -> (Arc<FileDefinitions>, Arc<DefinitionNamer>) {
        let definitions = FileDefinitions::from_yaml_str(DEFINITIONS_YAML).unwrap();
        let registry = user_registry();
        (
            Arc::new(definitions),
            Arc::new(DefinitionNamer::new([&registry])),
        )
    }

    #[test]
    fn test_swagger_document() {
        let (definitions, namer) = capabilities();
        let config = build_v2_config(definitions, namer);
        let document = swagger_document(&config).unwrap();
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value["swagger"], "2.0");
        assert_eq!(value["info"]["title"], "OpenShift OAuth-related APIs");
        assert_eq!(value["schemes"], serde_json::json!(["https"]));
        assert_eq!(value["securityDefinitions"]["BearerToken"]["in"], "header");

        let user = &value["definitions"]["com.github.openshift.api.user.v1.User"];
        assert_eq!(
            user["properties"]["metadata"]["$ref"],
            "#/definitions/io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta"
        );
        assert_eq!(user[EXTENSION_GVK][0]["group"], "user.openshift.io");

        let meta = &value["definitions"]["io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta"];
        assert!(meta.get(EXTENSION_GVK).is_none());
    }

    struct SameNamer;

    impl DefinitionNameResolver for SameNamer {
        fn definition_name(&self, _name: &str) -> (String, oauth_openapi_spec::Extensions) {
            ("Same".to_string(), oauth_openapi_spec::Extensions::new())
        }
    }

    #[test]
    fn test_swagger_document_rejects_colliding_names() {
        let (definitions, _) = capabilities();
        let config = build_v2_config(definitions, Arc::new(SameNamer));
        let err = swagger_document(&config).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateDefinitionName { ref name, .. } if name == "Same"));
    }

    #[test]
    fn test_openapi_document() {
        let (definitions, namer) = capabilities();
        let config = build_v3_config(definitions, namer).unwrap();
        let document = openapi_document(&config);
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(value["openapi"], "3.0.0");
        assert_eq!(
            value["components"]["securitySchemes"]["BearerToken"]["name"],
            "authorization"
        );
        let user = &value["components"]["schemas"]["com.github.openshift.api.user.v1.User"];
        assert_eq!(
            user["properties"]["metadata"]["$ref"],
            "#/components/schemas/io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta"
        );
        assert!(value["paths"].as_object().unwrap().is_empty());
    }
}
