//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading or parsing error.
    #[error("schema error: {0}")]
    Schema(#[from] gqlgen_schema::SchemaError),

    /// Output sink error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two declarations resolve to the same Go identifier.
    #[error("identifier '{name}' is already declared")]
    DuplicateDeclaration {
        /// Colliding identifier.
        name: String,
    },

    /// Requested entities that never made it into the output.
    #[error("the following entities are not found in graphql schemas: {}", names.join(", "))]
    MissingEntities {
        /// Missing entity names, in request order.
        names: Vec<String>,
    },
}

impl CodegenError {
    /// Creates a duplicate declaration error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateDeclaration { name: name.into() }
    }
}
