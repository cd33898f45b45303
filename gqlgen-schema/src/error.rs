//! Error types for schema loading and parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for schema loading and parsing operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// GraphQL SDL parsing error.
    #[error("{0}")]
    Parse(#[from] graphql_parser::schema::ParseError),

    /// Schema source could not be read.
    #[error("failed to read schema '{}': {source}", path.display())]
    Io {
        /// Path of the schema source.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// No schema sources were supplied.
    #[error("no schema sources supplied")]
    NoSchemas,
}

impl SchemaError {
    /// Creates an IO error for the given schema path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = SchemaError::io(
            "schemas/user.graphql",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("schemas/user.graphql"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_no_schemas_display() {
        assert_eq!(
            SchemaError::NoSchemas.to_string(),
            "no schema sources supplied"
        );
    }
}
