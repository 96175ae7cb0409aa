//! Registry types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Group, version and kind of a served API type
///
/// Ordering compares group, then version, then kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// `group/version`, or just `version` for the core group
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// JSON form used in the `x-kubernetes-group-version-kind` extension
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "group": self.group,
            "kind": self.kind,
            "version": self.version,
        })
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.api_version(), self.kind)
    }
}

/// A registered type as written in configuration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownType {
    /// Fully qualified type name, e.g. `github.com/openshift/api/user/v1.User`
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub group: String,

    pub version: String,

    pub kind: String,
}

impl KnownType {
    pub fn gvk(&self) -> GroupVersionKind {
        GroupVersionKind::new(&self.group, &self.version, &self.kind)
    }
}

/// Named registry mapping group/version/kinds to type names
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    name: String,
    types: BTreeMap<GroupVersionKind, String>,
}

impl TypeRegistry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a type under a group/version/kind, replacing any previous
    /// registration of the same kind
    pub fn add_known_type(&mut self, gvk: GroupVersionKind, type_name: impl Into<String>) {
        self.types.insert(gvk, type_name.into());
    }

    /// Register every type of a group/version whose kind matches the last
    /// segment of its type name
    pub fn add_known_types<I, S>(&mut self, group: &str, version: &str, type_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for type_name in type_names {
            let type_name = type_name.into();
            let kind = type_name
                .rsplit('.')
                .next()
                .unwrap_or(type_name.as_str())
                .to_string();
            self.add_known_type(GroupVersionKind::new(group, version, kind), type_name);
        }
    }

    pub fn extend(&mut self, known: impl IntoIterator<Item = KnownType>) {
        for known_type in known {
            self.add_known_type(known_type.gvk(), known_type.type_name);
        }
    }

    pub fn all_known_types(&self) -> impl Iterator<Item = (&GroupVersionKind, &str)> {
        self.types.iter().map(|(gvk, name)| (gvk, name.as_str()))
    }

    pub fn type_for(&self, gvk: &GroupVersionKind) -> Option<&str> {
        self.types.get(gvk).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
