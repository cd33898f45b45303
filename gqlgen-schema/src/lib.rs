//! # gqlgen Schema
//!
//! GraphQL schema loading and document model.
//!
//! This crate provides:
//! - Reading and merging schema files
//! - SDL parsing (via `graphql-parser`)
//! - An owned, immutable document model for code generation

pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

pub use error::SchemaError;
pub use loader::{load_schema, load_schema_files, read_schemas};
pub use parser::parse_schema;
pub use types::{
    Definition, DefinitionKind, Field, ROOT_OPERATION_TYPES, SchemaDocument, TypeRef,
};
