//! Schema source loading.
//!
//! Schemas are often split across several files. They are read in the order
//! given and concatenated into a single SDL text before parsing, so type
//! references may cross file boundaries.

use crate::error::SchemaError;
use crate::parser::parse_schema;
use crate::types::SchemaDocument;
use std::path::Path;

/// Reads and merges schema sources into one SDL string.
///
/// # Errors
/// Returns `SchemaError::NoSchemas` for an empty list, or `SchemaError::Io`
/// naming the first file that cannot be read.
pub fn read_schemas<P: AsRef<Path>>(paths: &[P]) -> Result<String, SchemaError> {
    if paths.is_empty() {
        return Err(SchemaError::NoSchemas);
    }

    let mut merged = String::new();
    for path in paths {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
        tracing::debug!("Read schema {} ({} bytes)", path.display(), source.len());
        merged.push_str(&source);
        merged.push('\n');
    }

    Ok(merged)
}

/// Parses merged schema text into a document.
///
/// # Errors
/// Returns `SchemaError::Parse` if the SDL is malformed.
pub fn load_schema(sdl: &str) -> Result<SchemaDocument, SchemaError> {
    let doc = parse_schema(sdl)?;
    tracing::debug!("Loaded schema with {} definitions", doc.len());
    Ok(doc)
}

/// Reads, merges and parses schema files.
///
/// # Errors
/// Returns `SchemaError` if reading or parsing fails.
pub fn load_schema_files<P: AsRef<Path>>(paths: &[P]) -> Result<SchemaDocument, SchemaError> {
    let sdl = read_schemas(paths)?;
    load_schema(&sdl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn schema_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_read_schemas_merges_in_order() {
        let a = schema_file("type A { b: B }");
        let b = schema_file("type B { id: ID! }");

        let merged = read_schemas(&[a.path(), b.path()]).expect("Failed to read");
        let a_pos = merged.find("type A").expect("A present");
        let b_pos = merged.find("type B").expect("B present");
        assert!(a_pos < b_pos);
    }

    #[test]
    fn test_load_schema_files_resolves_across_files() {
        let a = schema_file("type A { b: B }");
        let b = schema_file("type B { id: ID! }");

        let doc = load_schema_files(&[a.path(), b.path()]).expect("Failed to load");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.definitions[0].fields[0].field_type.name, "B");
    }

    #[test]
    fn test_read_schemas_empty_list() {
        let paths: [&Path; 0] = [];
        assert!(matches!(read_schemas(&paths), Err(SchemaError::NoSchemas)));
    }

    #[test]
    fn test_read_schemas_missing_file() {
        let result = read_schemas(&["/nonexistent/schema.graphql"]);
        match result {
            Err(SchemaError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/schema.graphql"));
            }
            other => panic!("expected IO error, got {:?}", other),
        }
    }
}
