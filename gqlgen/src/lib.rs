//! # gqlgen
//!
//! Generate Go structs, enum types and constants from GraphQL schemas.
//!
//! Given one or more schema files and the entities a program actually uses,
//! gqlgen emits only those entities plus everything they reference, so the
//! generated file always compiles and stays small.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gqlgen::prelude::*;
//!
//! let config = Config {
//!     schemas: vec!["schema.graphql".into()],
//!     outputs: vec![OutputItem {
//!         entities: vec!["Person".into()],
//!         ..OutputItem::new("models.go", "models")
//!     }],
//! };
//! gqlgen::run(&config)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema loading, SDL parsing and the document model
//! - [`codegen`] - Type mapping, dependency resolution and Go emission
//! - [`config`] - Run configuration (code or TOML)

pub mod config;
pub mod error;
pub mod prelude;

pub use config::{Config, OutputItem};
pub use error::GqlgenError;

/// Schema loading and document model.
pub mod schema {
    pub use gqlgen_schema::*;
}

/// Go code generation.
pub mod codegen {
    pub use gqlgen_codegen::*;
}

use gqlgen_codegen::{FileOutput, Generator, Output};
use gqlgen_schema::{load_schema, read_schemas};
use std::path::Path;

/// Generates every entity of a single schema file into a single Go file.
///
/// # Errors
/// Returns `GqlgenError::Config` if any argument is empty, otherwise any
/// error from [`run`].
pub fn generate(
    schema_file: impl AsRef<Path>,
    package_name: &str,
    output_file: impl AsRef<Path>,
) -> Result<(), GqlgenError> {
    let schema_file = schema_file.as_ref();
    let output_file = output_file.as_ref();

    if schema_file.as_os_str().is_empty() {
        return Err(GqlgenError::config("schemaFile not defined"));
    }
    if package_name.is_empty() {
        return Err(GqlgenError::config("packageName not defined"));
    }
    if output_file.as_os_str().is_empty() {
        return Err(GqlgenError::config("outputFile not defined"));
    }

    let config = Config {
        schemas: vec![schema_file.to_path_buf()],
        outputs: vec![OutputItem::new(output_file, package_name)],
    };
    run(&config)
}

/// Executes a run: merges the schemas once, then writes each output.
///
/// # Errors
/// Returns `GqlgenError` if validation, schema loading, output creation or
/// generation fails. Outputs written before the failure are left in place.
pub fn run(config: &Config) -> Result<(), GqlgenError> {
    config.validate()?;

    let sdl = read_schemas(&config.schemas)?;
    let doc = load_schema(&sdl)?;

    for item in &config.outputs {
        let path = &item.output_path;
        let mut output =
            FileOutput::create(path).map_err(|source| GqlgenError::output(path, source))?;

        Generator::new(&mut output, item.generator_config()).generate(&doc)?;

        output
            .close()
            .map_err(|source| GqlgenError::output(path, source))?;
        tracing::info!("Generated {} (package {})", path.display(), item.package_name);
    }

    Ok(())
}
