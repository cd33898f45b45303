//! GraphQL to Go type mapping.

use crate::go::enums::EnumCatalog;
use gqlgen_schema::TypeRef;

/// Built-in GraphQL scalars and their Go equivalents.
pub const SCALAR_TYPES: [(&str, &str); 5] = [
    ("Int", "int64"),
    ("Float", "float64"),
    ("String", "string"),
    ("Boolean", "bool"),
    ("ID", "string"),
];

/// Maps a GraphQL scalar name to its Go type.
///
/// Names outside the scalar table are returned unchanged so object and enum
/// names flow through.
#[must_use]
pub fn map_scalar(name: &str) -> &str {
    SCALAR_TYPES
        .iter()
        .find(|(gql, _)| *gql == name)
        .map_or(name, |&(_, go)| go)
}

/// Resolves field type references to Go type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    enums: &'a EnumCatalog,
}

impl<'a> TypeMapper<'a> {
    /// Creates a mapper that substitutes synthetic enum names from `enums`.
    #[must_use]
    pub fn new(enums: &'a EnumCatalog) -> Self {
        Self { enums }
    }

    /// Resolves a base type name, adding a pointer when nullable.
    #[must_use]
    pub fn resolve(&self, name: &str, non_null: bool) -> String {
        let go_type = match self.enums.get(name) {
            Some(info) => info.type_name.as_str(),
            None => map_scalar(name),
        };

        if non_null {
            go_type.to_string()
        } else {
            format!("*{}", go_type)
        }
    }

    /// Resolves the Go type of a field.
    ///
    /// Lists become slices of their element type. Only the element's
    /// nullability is honored; the slice itself is never a pointer.
    #[must_use]
    pub fn field_type(&self, type_ref: &TypeRef) -> String {
        match type_ref.elem.as_deref() {
            Some(elem) => format!("[]{}", self.resolve(&elem.name, elem.non_null)),
            None => self.resolve(&type_ref.name, type_ref.non_null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlgen_schema::{Definition, SchemaDocument};

    fn catalog() -> EnumCatalog {
        let doc = SchemaDocument::new(vec![Definition::enumeration(
            "Status",
            ["ACTIVE", "DONE"],
        )]);
        EnumCatalog::from_document(&doc)
    }

    #[test]
    fn test_map_scalar() {
        assert_eq!(map_scalar("Int"), "int64");
        assert_eq!(map_scalar("Float"), "float64");
        assert_eq!(map_scalar("String"), "string");
        assert_eq!(map_scalar("Boolean"), "bool");
        assert_eq!(map_scalar("ID"), "string");
        assert_eq!(map_scalar("User"), "User");
        assert_eq!(map_scalar("DateTime"), "DateTime");
    }

    #[test]
    fn test_resolve_nullability() {
        let enums = EnumCatalog::default();
        let mapper = TypeMapper::new(&enums);

        assert_eq!(mapper.resolve("ID", true), "string");
        assert_eq!(mapper.resolve("ID", false), "*string");
        assert_eq!(mapper.resolve("User", true), "User");
        assert_eq!(mapper.resolve("User", false), "*User");
    }

    #[test]
    fn test_resolve_enum_substitution() {
        let enums = catalog();
        let mapper = TypeMapper::new(&enums);

        assert_eq!(mapper.resolve("Status", true), "EnumStatus");
        assert_eq!(mapper.resolve("Status", false), "*EnumStatus");
    }

    #[test]
    fn test_field_type_lists() {
        let enums = catalog();
        let mapper = TypeMapper::new(&enums);

        let required = TypeRef::list(TypeRef::named("Int").non_null());
        assert_eq!(mapper.field_type(&required), "[]int64");

        let nullable_elems = TypeRef::list(TypeRef::named("String")).non_null();
        assert_eq!(mapper.field_type(&nullable_elems), "[]*string");

        let enum_list = TypeRef::list(TypeRef::named("Status").non_null());
        assert_eq!(mapper.field_type(&enum_list), "[]EnumStatus");
    }

    #[test]
    fn test_field_type_scalar() {
        let enums = EnumCatalog::default();
        let mapper = TypeMapper::new(&enums);

        assert_eq!(mapper.field_type(&TypeRef::named("Boolean").non_null()), "bool");
        assert_eq!(mapper.field_type(&TypeRef::named("Float")), "*float64");
    }
}
