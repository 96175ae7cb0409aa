//! Types shared by both OpenAPI dialects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Vendor extensions (`x-*` keys) attached to a schema or definition
pub type Extensions = BTreeMap<String, serde_json::Value>;

/// API information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,

    /// API version
    #[serde(default)]
    pub version: String,

    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// License information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

impl Info {
    /// Create info with only a title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: String::new(),
            description: None,
            license: None,
        }
    }
}

/// License information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License name
    pub name: String,

    /// License URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// JSON reference to a schema definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ref(String);

impl Ref {
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    /// Reference into the v2 `definitions` section
    pub fn definition(name: &str) -> Self {
        Self(format!("#/definitions/{}", escape_json_pointer(name)))
    }

    /// Reference into the v3 `components.schemas` section
    pub fn component_schema(name: &str) -> Self {
        Self(format!("#/components/schemas/{}", escape_json_pointer(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the reference already points inside a document
    pub fn is_pointer(&self) -> bool {
        self.0.starts_with('#')
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape a single JSON pointer token (RFC 6901)
pub fn escape_json_pointer(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// JSON schema subset used by the generated definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<Ref>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Schema items (for arrays)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Schema>>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// Vendor extensions and any keys not modelled above
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Schema {
    /// Schema that only refers to another definition
    pub fn reference(target: Ref) -> Self {
        Self {
            reference: Some(target),
            ..Default::default()
        }
    }

    /// Schema of a primitive type
    pub fn typed(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Default::default()
        }
    }

    /// Visit every `$ref` in this schema and its nested schemas
    pub fn visit_refs_mut(&mut self, visit: &mut dyn FnMut(&mut Ref)) {
        if let Some(reference) = self.reference.as_mut() {
            visit(reference);
        }
        for property in self.properties.values_mut() {
            property.visit_refs_mut(visit);
        }
        if let Some(items) = self.items.as_mut() {
            items.visit_refs_mut(visit);
        }
        if let Some(additional) = self.additional_properties.as_mut() {
            additional.visit_refs_mut(visit);
        }
        for nested in self
            .all_of
            .iter_mut()
            .chain(self.any_of.iter_mut())
            .chain(self.one_of.iter_mut())
        {
            nested.visit_refs_mut(visit);
        }
    }
}

/// A generated definition: its schema plus the types it refers to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDefinition {
    pub schema: Schema,

    /// Fully qualified type names this definition depends on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_escapes_pointer_tokens() {
        assert_eq!(
            Ref::definition("a/b~c").as_str(),
            "#/definitions/a~1b~0c"
        );
        assert_eq!(
            Ref::component_schema("io.k8s.api.core.v1.Pod").as_str(),
            "#/components/schemas/io.k8s.api.core.v1.Pod"
        );
        assert!(Ref::definition("x").is_pointer());
        assert!(!Ref::new("k8s.io/api/core/v1.Pod").is_pointer());
    }

    #[test]
    fn test_schema_serializes_ref_and_extensions() {
        let mut schema = Schema::typed("object");
        schema
            .properties
            .insert("metadata".to_string(), Schema::reference(Ref::definition("meta")));
        schema.extensions.insert(
            "x-kubernetes-group-version-kind".to_string(),
            serde_json::json!([{"group": "user.openshift.io", "kind": "User", "version": "v1"}]),
        );

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["type"], "object");
        assert_eq!(value["properties"]["metadata"]["$ref"], "#/definitions/meta");
        assert_eq!(
            value["x-kubernetes-group-version-kind"][0]["kind"],
            "User"
        );
        assert!(value.get("required").is_none());
    }

    #[test]
    fn test_schema_parses_unknown_keys_into_extensions() {
        let yaml = r#"
type: object
additionalProperties:
  type: string
x-kubernetes-preserve-unknown-fields: true
"#;
        let schema: Schema = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schema.schema_type.as_deref(), Some("object"));
        assert_eq!(
            schema.additional_properties.unwrap().schema_type.as_deref(),
            Some("string")
        );
        assert_eq!(
            schema.extensions.get("x-kubernetes-preserve-unknown-fields"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn test_visit_refs_reaches_nested_schemas() {
        let mut items = Schema::typed("array");
        items.items = Some(Box::new(Schema::reference(Ref::new("pkg.Item"))));

        let mut schema = Schema::typed("object");
        schema.properties.insert("items".to_string(), items);
        schema.all_of.push(Schema::reference(Ref::new("pkg.Base")));
        schema.additional_properties = Some(Box::new(Schema::reference(Ref::new("pkg.Value"))));

        let mut seen = Vec::new();
        schema.visit_refs_mut(&mut |r: &mut Ref| seen.push(r.as_str().to_string()));
        seen.sort();
        assert_eq!(seen, vec!["pkg.Base", "pkg.Item", "pkg.Value"]);
    }
}
