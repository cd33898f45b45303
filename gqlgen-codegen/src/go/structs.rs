//! Struct generation for objects, input objects and unions.

use crate::go::types::TypeMapper;
use gqlgen_schema::{Definition, DefinitionKind, Field};

/// Go field holding the union member discriminant.
pub const UNION_DISCRIMINANT_FIELD: &str = "TypeName";

/// JSON key of the union member discriminant.
pub const UNION_DISCRIMINANT_TAG: &str = "__typeName";

/// Generator for struct declarations.
pub struct StructGenerator<'a> {
    types: TypeMapper<'a>,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(types: TypeMapper<'a>) -> Self {
        Self { types }
    }

    /// Generates the declaration for a definition.
    ///
    /// Returns `None` for kinds that are not emitted as structs.
    #[must_use]
    pub fn generate(&self, def: &Definition) -> Option<String> {
        match def.kind {
            DefinitionKind::Object | DefinitionKind::InputObject => {
                let fields: Vec<String> = def.fields.iter().map(|f| self.field_line(f)).collect();
                Some(render_struct(&def.name, &fields))
            }
            DefinitionKind::Union => Some(self.generate_union(def)),
            DefinitionKind::Enum | DefinitionKind::Other => None,
        }
    }

    /// Generates a union as a struct with a discriminant and one embedded
    /// member per union type.
    fn generate_union(&self, def: &Definition) -> String {
        let mut fields = Vec::with_capacity(def.types.len() + 1);
        fields.push(tagged_field(
            UNION_DISCRIMINANT_FIELD,
            "string",
            UNION_DISCRIMINANT_TAG,
        ));
        fields.extend(def.types.iter().map(|member| format!("  {}", member)));
        render_struct(&def.name, &fields)
    }

    fn field_line(&self, field: &Field) -> String {
        tagged_field(
            &exported_name(&field.name),
            &self.types.field_type(&field.field_type),
            &field.name,
        )
    }
}

/// Renders one struct field with a JSON tag.
fn tagged_field(name: &str, go_type: &str, json_key: &str) -> String {
    format!("  {} {} `json:\"{}\"`", name, go_type, json_key)
}

fn render_struct(name: &str, fields: &[String]) -> String {
    if fields.is_empty() {
        return format!("type {} struct {{\n}}", name);
    }
    format!("type {} struct {{\n{}\n}}", name, fields.join("\n"))
}

/// Upper-cases the first character so the Go field is exported.
#[must_use]
pub fn exported_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
