//! Main code generator.
//!
//! The generator makes a single pass over a parsed document and writes, in
//! order: the header, every selected enum with its constants, then one struct
//! per selected object, input object or union. Each declared identifier is
//! recorded so collisions fail the run instead of producing a file that does
//! not compile.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::go::{EnumCatalog, StructGenerator, TypeMapper, resolve_dependencies};
use crate::keywords::KeywordRegistry;
use crate::output::Output;
use gqlgen_schema::SchemaDocument;

/// Renders the generated-code header for `package_name`.
#[must_use]
pub fn header(package_name: &str) -> String {
    format!(
        "// Code generated by go generate; DO NOT EDIT.\n\
         // This file was generated from GraphQL schema\n\
         \n\
         package {}\n",
        package_name
    )
}

/// Go code generator writing to an [`Output`].
pub struct Generator<'o, O: Output + ?Sized> {
    output: &'o mut O,
    config: GeneratorConfig,
}

impl<'o, O: Output + ?Sized> Generator<'o, O> {
    /// Creates a new generator.
    pub fn new(output: &'o mut O, config: GeneratorConfig) -> Self {
        Self { output, config }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates Go declarations for `doc`.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the output fails,
    /// `CodegenError::DuplicateDeclaration` if two declarations collide, and
    /// `CodegenError::MissingEntities` if a requested entity was never
    /// declared.
    pub fn generate(&mut self, doc: &SchemaDocument) -> Result<(), CodegenError> {
        if !self.config.disable_header {
            self.output.writeln(&header(&self.config.package_name))?;
        }

        let mut declared = KeywordRegistry::new();
        let enums = EnumCatalog::from_document(doc);
        let resolved = resolve_dependencies(doc, &self.config.entities, &enums);
        let filtered = self.config.has_filter();

        for info in enums.iter() {
            if filtered && !resolved.contains(&info.type_name) {
                continue;
            }
            declared.declare(&info.type_name)?;
            self.output.writeln(&info.type_declaration())?;
            for value in &info.values {
                declared.declare(&info.const_name(value))?;
                self.output.writeln(&info.const_declaration(value))?;
            }
            self.output.writeln("")?;
        }

        let structs = StructGenerator::new(TypeMapper::new(&enums));
        for def in &doc.definitions {
            if filtered && !resolved.contains(&def.name) {
                continue;
            }
            if def.is_root_operation() {
                tracing::debug!("Skipping root operation type {}", def.name);
                continue;
            }
            let Some(declaration) = structs.generate(def) else {
                continue;
            };
            declared.declare(&def.name)?;
            self.output.writeln(&declaration)?;
            self.output.writeln("")?;
        }

        let missing = declared.missing(&self.config.entities);
        if !missing.is_empty() {
            return Err(CodegenError::MissingEntities { names: missing });
        }

        tracing::debug!(
            "Generated {} declarations for package {}",
            declared.len(),
            self.config.package_name
        );
        Ok(())
    }
}
