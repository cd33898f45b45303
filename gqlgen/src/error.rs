//! Error types for end-to-end generation runs.

use gqlgen_codegen::CodegenError;
use gqlgen_schema::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for `generate` and `run`.
#[derive(Debug, Error)]
pub enum GqlgenError {
    /// A required setting is missing or empty.
    #[error("configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The run configuration file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The run configuration file is not valid TOML or has unknown keys.
    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Schemas could not be read or parsed.
    #[error("failed to load input schemas: {0}")]
    Schema(#[from] SchemaError),

    /// The output file could not be created or finalized.
    #[error("failed to write output to '{}': {source}", path.display())]
    Output {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Code generation failed.
    #[error("failed to generate go structs: {0}")]
    Generation(#[from] CodegenError),
}

impl GqlgenError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an output error for the given path.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = GqlgenError::config("packageName not defined");
        assert_eq!(
            err.to_string(),
            "configuration error: packageName not defined"
        );
    }

    #[test]
    fn test_generation_error_wraps_context() {
        let err = GqlgenError::from(CodegenError::duplicate("User"));
        assert_eq!(
            err.to_string(),
            "failed to generate go structs: identifier 'User' is already declared"
        );
    }
}
