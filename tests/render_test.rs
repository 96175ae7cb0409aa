use oauth_openapi::{Config, OAuthOpenApi, OpenApiVersion, OutputConfig, OutputFormat};
use std::path::PathBuf;
use tempfile::TempDir;

const DEFINITIONS: &str = r#"
github.com/openshift/api/user/v1.Group:
  schema:
    type: object
    description: Group represents a referenceable set of Users
    properties:
      metadata:
        $ref: k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta
      users:
        type: array
        items:
          type: string
  dependencies:
    - k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta
k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta:
  schema:
    type: object
    properties:
      name:
        type: string
"#;

fn app_with_definitions(temp_dir: &TempDir) -> OAuthOpenApi {
    let definitions_path = temp_dir.path().join("definitions.yaml");
    std::fs::write(&definitions_path, DEFINITIONS).unwrap();

    let config = Config {
        definitions: Some(PathBuf::from(&definitions_path)),
        ..Config::default()
    };
    OAuthOpenApi::new(config).unwrap()
}

#[test]
fn test_render_swagger_document() {
    let temp_dir = TempDir::new().unwrap();
    let app = app_with_definitions(&temp_dir);
    assert_eq!(app.definitions().len(), 2);
    assert!(app.definitions().missing_dependencies().is_empty());

    let rendered = app.render(OpenApiVersion::V2).unwrap();
    let document: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(document["swagger"], "2.0");
    assert_eq!(document["info"]["license"]["name"], "Apache 2.0 (ASL2.0)");
    assert_eq!(document["securityDefinitions"]["BearerToken"]["type"], "apiKey");

    let group = &document["definitions"]["com.github.openshift.api.user.v1.Group"];
    assert_eq!(
        group["properties"]["metadata"]["$ref"],
        "#/definitions/io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta"
    );
    assert_eq!(
        group["x-kubernetes-group-version-kind"][0]["kind"],
        "Group"
    );
}

#[test]
fn test_render_openapi_v3_as_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let app = app_with_definitions(&temp_dir);

    let output = OutputConfig {
        format: OutputFormat::Yaml,
        pretty: true,
    };
    let rendered = app.render_with(OpenApiVersion::V3, &output).unwrap();
    let document: serde_json::Value = serde_yaml::from_str(&rendered).unwrap();

    assert_eq!(document["openapi"], "3.0.0");
    assert_eq!(
        document["components"]["schemas"]["com.github.openshift.api.user.v1.Group"]["properties"]
            ["metadata"]["$ref"],
        "#/components/schemas/io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta"
    );
    assert_eq!(
        document["components"]["securitySchemes"]["BearerToken"]["name"],
        "authorization"
    );
}

#[test]
fn test_render_without_definitions() {
    let app = OAuthOpenApi::new(Config::default()).unwrap();
    let rendered = app.render(OpenApiVersion::V3).unwrap();
    let document: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert!(document["components"].get("schemas").is_none());
    assert_eq!(document["info"]["title"], "OpenShift OAuth-related APIs");
}
