//! Registries for the types served by the OAuth API server

use crate::types::TypeRegistry;

const OAUTH_GROUP: &str = "oauth.openshift.io";
const USER_GROUP: &str = "user.openshift.io";
const OAUTH_PACKAGE: &str = "github.com/openshift/api/oauth/v1";
const USER_PACKAGE: &str = "github.com/openshift/api/user/v1";

const OAUTH_KINDS: &[&str] = &[
    "OAuthAccessToken",
    "OAuthAccessTokenList",
    "OAuthAuthorizeToken",
    "OAuthAuthorizeTokenList",
    "OAuthClient",
    "OAuthClientList",
    "OAuthClientAuthorization",
    "OAuthClientAuthorizationList",
    "OAuthRedirectReference",
    "UserOAuthAccessToken",
    "UserOAuthAccessTokenList",
];

const USER_KINDS: &[&str] = &[
    "Group",
    "GroupList",
    "Identity",
    "IdentityList",
    "User",
    "UserList",
    "UserIdentityMapping",
];

/// `oauth.openshift.io/v1` types
pub fn oauth_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new(OAUTH_GROUP);
    registry.add_known_types(
        OAUTH_GROUP,
        "v1",
        OAUTH_KINDS
            .iter()
            .map(|kind| format!("{}.{}", OAUTH_PACKAGE, kind)),
    );
    registry
}

/// `user.openshift.io/v1` types
pub fn user_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new(USER_GROUP);
    registry.add_known_types(
        USER_GROUP,
        "v1",
        USER_KINDS
            .iter()
            .map(|kind| format!("{}.{}", USER_PACKAGE, kind)),
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DefinitionNamer, GroupVersionKind};

    #[test]
    fn test_builtin_registries() {
        let oauth = oauth_registry();
        let user = user_registry();
        assert_eq!(oauth.len(), OAUTH_KINDS.len());
        assert_eq!(user.len(), USER_KINDS.len());

        let gvk = GroupVersionKind::new("oauth.openshift.io", "v1", "OAuthAccessToken");
        assert_eq!(
            oauth.type_for(&gvk),
            Some("github.com/openshift/api/oauth/v1.OAuthAccessToken")
        );

        let namer = DefinitionNamer::new([&oauth, &user]);
        let (name, extensions) = namer.definition_name("github.com/openshift/api/user/v1.Group");
        assert_eq!(name, "com.github.openshift.api.user.v1.Group");
        assert_eq!(extensions.len(), 1);
    }
}
