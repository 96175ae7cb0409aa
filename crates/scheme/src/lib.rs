//! Registry of API types and the namer that turns type names into OpenAPI
//! definition names

pub mod builtin;
pub mod namer;
pub mod types;

pub use builtin::{oauth_registry, user_registry};
pub use namer::{to_rest_friendly_name, DefinitionNamer, EXTENSION_GVK};
pub use types::{GroupVersionKind, KnownType, TypeRegistry};
