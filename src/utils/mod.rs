//! Utility functions for oauth-openapi

use crate::{OAuthOpenApiError, OAuthOpenApiResult};
use std::path::{Path, PathBuf};

/// Expand `~` and environment variables in a configured path
pub fn expand_path(path: &Path) -> OAuthOpenApiResult<PathBuf> {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::full(&path_str).map_err(|e| {
        OAuthOpenApiError::Config(format!("Failed to expand path {:?}: {}", path, e))
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Ensure the parent directory of a file exists
pub async fn ensure_parent_directory(path: &Path) -> OAuthOpenApiResult<()> {
    if let Some(parent) = path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        if !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        } else if !parent.is_dir() {
            return Err(OAuthOpenApiError::Config(format!(
                "Path exists but is not a directory: {:?}",
                parent
            )));
        }
    }
    Ok(())
}

/// Write rendered output to a file, or stdout when no path is given
pub async fn write_output(path: Option<&Path>, content: &str) -> OAuthOpenApiResult<()> {
    match path {
        Some(path) => {
            ensure_parent_directory(path).await?;
            tokio::fs::write(path, content).await?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
