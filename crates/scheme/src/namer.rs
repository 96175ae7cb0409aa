//! Definition naming for registered types

use crate::types::{GroupVersionKind, TypeRegistry};
use oauth_openapi_spec::Extensions;
use std::collections::BTreeMap;
use tracing::debug;

/// Extension listing every group/version/kind a definition is served as
pub const EXTENSION_GVK: &str = "x-kubernetes-group-version-kind";

/// Turn a Go-style package path into a REST friendly name
///
/// The first path segment is a domain and gets its dot separated parts
/// reversed, then every segment is joined with dots:
/// `k8s.io/api/core/v1.Pod` becomes `io.k8s.api.core.v1.Pod`.
pub fn to_rest_friendly_name(name: &str) -> String {
    let mut parts: Vec<String> = name.split('/').map(str::to_string).collect();
    if let Some(first) = parts.first_mut() {
        if first.contains('.') {
            let mut domain: Vec<&str> = first.split('.').collect();
            domain.reverse();
            *first = domain.join(".");
        }
    }
    parts.join(".")
}

/// Resolves type names to definition names using one or more registries
#[derive(Debug, Clone, Default)]
pub struct DefinitionNamer {
    type_group_version_kinds: BTreeMap<String, Vec<GroupVersionKind>>,
}

impl DefinitionNamer {
    pub fn new<'a>(registries: impl IntoIterator<Item = &'a TypeRegistry>) -> Self {
        let mut type_group_version_kinds: BTreeMap<String, Vec<GroupVersionKind>> =
            BTreeMap::new();

        for registry in registries {
            debug!(
                "Indexing {} types from registry {}",
                registry.len(),
                registry.name()
            );
            for (gvk, type_name) in registry.all_known_types() {
                let gvks = type_group_version_kinds
                    .entry(type_name.to_string())
                    .or_default();
                if !gvks.contains(gvk) {
                    gvks.push(gvk.clone());
                }
            }
        }

        for gvks in type_group_version_kinds.values_mut() {
            gvks.sort();
        }

        Self {
            type_group_version_kinds,
        }
    }

    /// Definition name and extensions for a fully qualified type name
    ///
    /// Types absent from every registry still get a name but no extensions.
    pub fn definition_name(&self, name: &str) -> (String, Extensions) {
        let mut extensions = Extensions::new();
        if let Some(gvks) = self.type_group_version_kinds.get(name) {
            extensions.insert(
                EXTENSION_GVK.to_string(),
                serde_json::Value::Array(gvks.iter().map(GroupVersionKind::to_json).collect()),
            );
        }
        (to_rest_friendly_name(name), extensions)
    }

    /// Group/version/kinds a type is registered under
    pub fn group_version_kinds(&self, name: &str) -> &[GroupVersionKind] {
        self.type_group_version_kinds
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct registered types
    pub fn len(&self) -> usize {
        self.type_group_version_kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_group_version_kinds.is_empty()
    }
}
