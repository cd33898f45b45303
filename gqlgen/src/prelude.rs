//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use gqlgen::prelude::*;
//! ```

// Schema types
pub use gqlgen_schema::{
    Definition, DefinitionKind, Field, SchemaDocument, SchemaError, TypeRef, load_schema,
    load_schema_files, parse_schema, read_schemas,
};

// Codegen types
pub use gqlgen_codegen::{
    CodegenError, FileOutput, Generator, GeneratorConfig, Output, StringOutput,
    generate_from_sdl,
};

// Run configuration
pub use crate::config::{Config, OutputItem};
pub use crate::error::GqlgenError;
pub use crate::{generate, run};
