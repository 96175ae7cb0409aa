//! OpenAPI document model shared by the v2 (Swagger) and v3 configurations

pub mod spec3;
pub mod swagger;
pub mod types;

pub use types::{Extensions, Info, License, OpenApiDefinition, Ref, Schema};
