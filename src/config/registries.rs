//! Type registry configuration

use anyhow::{anyhow, Result};
use oauth_openapi_scheme::{oauth_registry, user_registry, KnownType, TypeRegistry};
use serde::{Deserialize, Serialize};

/// Which type registries the definition namer indexes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Include the built-in `oauth.openshift.io` and `user.openshift.io` types
    #[serde(default = "default_builtin")]
    pub builtin: bool,

    /// Additional types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<KnownType>,
}

fn default_builtin() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            types: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<()> {
        for known in &self.types {
            if known.type_name.trim().is_empty() {
                return Err(anyhow!("Registry type name must not be empty"));
            }
            if known.version.is_empty() || known.kind.is_empty() {
                return Err(anyhow!(
                    "Registry type {} must declare a version and kind",
                    known.type_name
                ));
            }
        }
        Ok(())
    }

    /// Build the configured registries
    pub fn registries(&self) -> Vec<TypeRegistry> {
        let mut registries = Vec::new();
        if self.builtin {
            registries.push(oauth_registry());
            registries.push(user_registry());
        }
        if !self.types.is_empty() {
            let mut extra = TypeRegistry::new("config");
            extra.extend(self.types.iter().cloned());
            registries.push(extra);
        }
        registries
    }
}
