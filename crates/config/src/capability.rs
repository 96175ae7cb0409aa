//! Capabilities supplied by collaborators

use oauth_openapi_scheme::DefinitionNamer;
use oauth_openapi_spec::{Extensions, OpenApiDefinition, Ref};
use std::collections::BTreeMap;

/// Generated definitions keyed by fully qualified type name
pub type Definitions = BTreeMap<String, OpenApiDefinition>;

/// Maps an internal type name to the name its schema is documented under
pub trait DefinitionNameResolver: Send + Sync {
    fn definition_name(&self, name: &str) -> (String, Extensions);
}

/// Produces every generated definition
///
/// `reference` turns a type name into a reference to that type's definition
/// and must be used for every cross-definition `$ref`.
pub trait DefinitionsProvider: Send + Sync {
    fn definitions(&self, reference: &dyn Fn(&str) -> Ref) -> Definitions;
}

impl DefinitionNameResolver for DefinitionNamer {
    fn definition_name(&self, name: &str) -> (String, Extensions) {
        DefinitionNamer::definition_name(self, name)
    }
}
