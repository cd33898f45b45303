//! GraphQL SDL parser.
//!
//! Lexing and parsing are delegated to `graphql-parser`; this module converts
//! its AST into the owned [`SchemaDocument`] model.

use crate::error::SchemaError;
use crate::types::{Definition, Field, SchemaDocument, TypeRef};
use graphql_parser::schema::{self as gql, TypeDefinition};

/// Parses a GraphQL SDL string into a schema document.
///
/// # Arguments
/// * `sdl` - GraphQL schema definition language text
///
/// # Returns
/// Parsed document with definitions in source order.
///
/// # Errors
/// Returns `SchemaError::Parse` if the SDL is malformed.
pub fn parse_schema(sdl: &str) -> Result<SchemaDocument, SchemaError> {
    let doc = gql::parse_schema::<String>(sdl)?;

    let definitions = doc
        .definitions
        .iter()
        .filter_map(|def| match def {
            gql::Definition::TypeDefinition(td) => Some(convert_type_definition(td)),
            // Schema blocks, directive definitions and extensions declare no entities.
            _ => None,
        })
        .collect();

    Ok(SchemaDocument::new(definitions))
}

fn convert_type_definition(td: &TypeDefinition<'_, String>) -> Definition {
    match td {
        TypeDefinition::Object(obj) => Definition::object(
            obj.name.clone(),
            obj.fields
                .iter()
                .map(|f| Field::new(f.name.clone(), convert_type(&f.field_type)))
                .collect(),
        ),
        TypeDefinition::InputObject(input) => Definition::input_object(
            input.name.clone(),
            input
                .fields
                .iter()
                .map(|f| Field::new(f.name.clone(), convert_type(&f.value_type)))
                .collect(),
        ),
        TypeDefinition::Union(u) => Definition::union(u.name.clone(), u.types.iter().cloned()),
        TypeDefinition::Enum(e) => {
            Definition::enumeration(e.name.clone(), e.values.iter().map(|v| v.name.clone()))
        }
        TypeDefinition::Scalar(s) => Definition::other(s.name.clone()),
        TypeDefinition::Interface(i) => Definition::other(i.name.clone()),
    }
}

/// Converts a nested `graphql-parser` type into a [`TypeRef`].
fn convert_type(ty: &gql::Type<'_, String>) -> TypeRef {
    match ty {
        gql::Type::NamedType(name) => TypeRef::named(name.clone()),
        gql::Type::ListType(inner) => TypeRef::list(convert_type(inner)),
        gql::Type::NonNullType(inner) => convert_type(inner).non_null(),
    }
}
