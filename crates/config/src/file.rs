//! Definitions loaded from a JSON or YAML file

use crate::capability::{Definitions, DefinitionsProvider};
use crate::error::DefinitionsError;
use oauth_openapi_spec::Ref;
use std::path::Path;
use tracing::{debug, info};

/// Definitions provider backed by a file of generated schemas
///
/// The file maps fully qualified type names to `{schema, dependencies}`.
/// A `$ref` written as a type name is rewritten through the reference
/// callback; `$ref`s that are already JSON pointers are left alone.
#[derive(Debug, Clone, Default)]
pub struct FileDefinitions {
    definitions: Definitions,
}

impl FileDefinitions {
    pub fn new(definitions: Definitions) -> Self {
        Self { definitions }
    }

    /// Load definitions, parsing `.json` files as JSON and anything else as YAML
    pub fn from_path(path: &Path) -> Result<Self, DefinitionsError> {
        info!("Loading OpenAPI definitions from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| DefinitionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, DefinitionsError> {
        Ok(Self::new(serde_json::from_str(content)?))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, DefinitionsError> {
        // An empty YAML document parses as null rather than an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(Self::new(serde_yaml::from_str(content)?))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Type names that are listed as dependencies but have no definition
    pub fn missing_dependencies(&self) -> Vec<String> {
        let mut missing: Vec<String> = self
            .definitions
            .values()
            .flat_map(|definition| definition.dependencies.iter())
            .filter(|dependency| !self.definitions.contains_key(dependency.as_str()))
            .cloned()
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}

impl DefinitionsProvider for FileDefinitions {
    fn definitions(&self, reference: &dyn Fn(&str) -> Ref) -> Definitions {
        let mut definitions = self.definitions.clone();
        let mut rewritten = 0usize;
        for definition in definitions.values_mut() {
            definition.schema.visit_refs_mut(&mut |target: &mut Ref| {
                if !target.is_pointer() {
                    *target = reference(target.as_str());
                    rewritten += 1;
                }
            });
        }
        debug!(
            "Provided {} definitions, rewrote {} references",
            definitions.len(),
            rewritten
        );
        definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEFINITIONS_YAML: &str = r##"
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
      status:
        $ref: "#/definitions/already.resolved"
  dependencies:
    - k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta
"##;

    #[test]
    fn test_rewrites_type_name_refs() {
        let provider = FileDefinitions::from_yaml_str(DEFINITIONS_YAML).unwrap();
        let definitions =
            provider.definitions(&|name: &str| Ref::new(format!("#/test/{}", name)));

        let group = &definitions["github.com/openshift/api/user/v1.Group"];
        assert_eq!(
            group.schema.properties["metadata"].reference.as_ref().unwrap().as_str(),
            "#/test/k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta"
        );
        assert_eq!(
            group.schema.properties["status"].reference.as_ref().unwrap().as_str(),
            "#/definitions/already.resolved"
        );
        assert_eq!(group.dependencies.len(), 1);
    }

    #[test]
    fn test_provider_does_not_mutate_source() {
        let provider = FileDefinitions::from_yaml_str(DEFINITIONS_YAML).unwrap();
        let _ = provider.definitions(&|name: &str| Ref::new(format!("#/first/{}", name)));
        let second = provider.definitions(&|name: &str| Ref::new(format!("#/second/{}", name)));
        let group = &second["github.com/openshift/api/user/v1.Group"];
        assert!(group.schema.properties["metadata"]
            .reference
            .as_ref()
            .unwrap()
            .as_str()
            .starts_with("#/second/"));
    }

    #[test]
    fn test_missing_dependencies() {
        let provider = FileDefinitions::from_yaml_str(DEFINITIONS_YAML).unwrap();
        assert_eq!(
            provider.missing_dependencies(),
            vec!["k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta".to_string()]
        );
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"pkg/v1.Thing": {{"schema": {{"type": "object"}}}}}}"#
        )
        .unwrap();

        let provider = FileDefinitions::from_path(file.path()).unwrap();
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_empty_yaml_is_empty() {
        let provider = FileDefinitions::from_yaml_str("\n").unwrap();
        assert!(provider.is_empty());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = FileDefinitions::from_path(Path::new("/nonexistent/definitions.yaml")).unwrap_err();
        assert!(matches!(err, DefinitionsError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/definitions.yaml"));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = FileDefinitions::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, DefinitionsError::Json(_)));
    }
}
