//! Build version reporting
//!
//! Release builds set `OAUTH_APISERVER_GIT_VERSION`, `OAUTH_APISERVER_GIT_COMMIT`,
//! `OAUTH_APISERVER_MAJOR`, `OAUTH_APISERVER_MINOR` and `OAUTH_APISERVER_BUILD_DATE`
//! at compile time. Development builds fall back to the crate version.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub major: String,
    pub minor: String,
    pub git_version: String,
    pub git_commit: String,
    pub build_date: String,
}

/// Version of the running build
pub fn get() -> VersionInfo {
    VersionInfo {
        major: option_env!("OAUTH_APISERVER_MAJOR").unwrap_or("").to_string(),
        minor: option_env!("OAUTH_APISERVER_MINOR").unwrap_or("").to_string(),
        git_version: option_env!("OAUTH_APISERVER_GIT_VERSION")
            .map(str::to_string)
            .unwrap_or_else(|| format!("v{}", env!("CARGO_PKG_VERSION"))),
        git_commit: option_env!("OAUTH_APISERVER_GIT_COMMIT")
            .unwrap_or("")
            .to_string(),
        build_date: option_env!("OAUTH_APISERVER_BUILD_DATE")
            .unwrap_or("1970-01-01T00:00:00Z")
            .to_string(),
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.git_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_is_git_version() {
        let info = get();
        assert!(!info.git_version.is_empty());
        assert_eq!(info.to_string(), info.git_version);
    }
}
