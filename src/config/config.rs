//! Main configuration structure and implementation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{OutputConfig, RegistryConfig};

/// File names searched in the working directory when no path is given
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".oauth-openapi.yaml",
    ".oauth-openapi.yml",
    "oauth-openapi.yaml",
    "oauth-openapi.yml",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Type registries feeding the definition namer
    #[serde(default)]
    pub registries: RegistryConfig,

    /// Generated definitions file (JSON or YAML); environment variables and
    /// `~` are expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<PathBuf>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read configuration {:?}: {}", path, e))?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        self.registries.validate()?;

        if let Some(path) = &self.definitions {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("Definitions path must not be empty"));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            registries: RegistryConfig::default(),
            definitions: None,
            output: OutputConfig::default(),
        }
    }
}
