//! # gqlgen Codegen
//!
//! Go code generation from GraphQL schemas.
//!
//! This crate provides:
//! - GraphQL to Go type mapping with nullability and list handling
//! - Enum type and constant synthesis
//! - Dependency resolution for requested entities
//! - Struct generation for objects, input objects and unions
//! - Output sinks for files and in-memory buffers

pub mod config;
pub mod error;
pub mod generator;
pub mod go;
pub mod keywords;
pub mod output;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;
pub use keywords::KeywordRegistry;
pub use output::{FileOutput, Output, StringOutput};

use gqlgen_schema::SchemaDocument;

/// Generates Go code for a parsed document into a string.
///
/// # Errors
/// Returns `CodegenError` if generation fails.
pub fn generate_document(
    doc: &SchemaDocument,
    config: GeneratorConfig,
) -> Result<String, CodegenError> {
    let mut output = StringOutput::new();
    Generator::new(&mut output, config).generate(doc)?;
    Ok(output.into_string())
}

/// Generates Go code from a GraphQL SDL string.
///
/// # Arguments
/// * `sdl` - GraphQL schema content
/// * `config` - Package name, entity selection and header toggle
///
/// # Returns
/// Generated Go code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_sdl(sdl: &str, config: GeneratorConfig) -> Result<String, CodegenError> {
    let doc = gqlgen_schema::parse_schema(sdl)?;
    generate_document(&doc, config)
}

/// Generates Go code from one or more GraphQL schema files.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_files<P: AsRef<std::path::Path>>(
    paths: &[P],
    config: GeneratorConfig,
) -> Result<String, CodegenError> {
    let doc = gqlgen_schema::load_schema_files(paths)?;
    generate_document(&doc, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_generate_from_sdl() {
        let code = generate_from_sdl(
            "type Person { firstName: String! }",
            GeneratorConfig::new("people"),
        )
        .expect("Failed to generate");
        assert!(code.contains("package people"));
        assert!(code.contains("  FirstName string `json:\"firstName\"`"));
    }

    #[test]
    fn test_generate_from_sdl_parse_error() {
        let err = generate_from_sdl("type {", GeneratorConfig::default()).expect_err("bad SDL");
        assert!(matches!(err, CodegenError::Schema(_)));
    }

    #[test]
    fn test_generate_from_files() {
        let mut a = tempfile::NamedTempFile::new().expect("temp file");
        a.write_all(b"type Order { customer: Customer! }")
            .expect("write");
        let mut b = tempfile::NamedTempFile::new().expect("temp file");
        b.write_all(b"type Customer { id: ID! }").expect("write");

        let code = generate_from_files(
            &[a.path(), b.path()],
            GeneratorConfig::new("shop").entities(["Order"]),
        )
        .expect("Failed to generate");
        assert!(code.contains("type Order struct"));
        assert!(code.contains("  Customer Customer `json:\"customer\"`"));
        assert!(code.contains("type Customer struct"));
    }
}
