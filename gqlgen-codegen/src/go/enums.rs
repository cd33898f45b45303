//! Enum type and constant generation.
//!
//! Every GraphQL enum `X` becomes a string-backed Go type `EnumX` with one
//! constant per value, named `EnumX<VALUE>` and holding the raw value name.

use gqlgen_schema::SchemaDocument;
use std::collections::HashMap;

/// Prefix of synthesized enum type names.
pub const ENUM_TYPE_PREFIX: &str = "Enum";

/// A synthesized Go enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumInfo {
    /// Go type name (`Enum` + GraphQL name).
    pub type_name: String,
    /// Value names in schema order.
    pub values: Vec<String>,
}

impl EnumInfo {
    /// Creates the info for a GraphQL enum.
    #[must_use]
    pub fn new(graphql_name: &str, values: Vec<String>) -> Self {
        Self {
            type_name: format!("{}{}", ENUM_TYPE_PREFIX, graphql_name),
            values,
        }
    }

    /// Returns the constant identifier for a value.
    #[must_use]
    pub fn const_name(&self, value: &str) -> String {
        format!("{}{}", self.type_name, value)
    }

    /// Renders `type EnumX string`.
    #[must_use]
    pub fn type_declaration(&self) -> String {
        format!("type {} string", self.type_name)
    }

    /// Renders `const EnumXV EnumX = "V"`.
    #[must_use]
    pub fn const_declaration(&self, value: &str) -> String {
        format!(
            "const {} {} = \"{}\"",
            self.const_name(value),
            self.type_name,
            value
        )
    }
}

/// All enums of a document, keyed by GraphQL name, in definition order.
#[derive(Debug, Clone, Default)]
pub struct EnumCatalog {
    enums: Vec<EnumInfo>,
    index: HashMap<String, usize>,
}

impl EnumCatalog {
    /// Builds the catalog from every enum definition in `doc`.
    #[must_use]
    pub fn from_document(doc: &SchemaDocument) -> Self {
        let mut catalog = Self::default();
        for def in doc.enums() {
            catalog.insert(&def.name, EnumInfo::new(&def.name, def.enum_values.clone()));
        }
        catalog
    }

    /// Adds an enum. A later definition with the same GraphQL name replaces
    /// the lookup entry but both stay in declaration order.
    fn insert(&mut self, graphql_name: &str, info: EnumInfo) {
        let idx = self.enums.len();
        self.enums.push(info);
        self.index.insert(graphql_name.to_string(), idx);
    }

    /// Looks up an enum by its GraphQL name.
    #[must_use]
    pub fn get(&self, graphql_name: &str) -> Option<&EnumInfo> {
        self.index.get(graphql_name).map(|&idx| &self.enums[idx])
    }

    /// Returns the synthesized type name for a GraphQL enum.
    #[must_use]
    pub fn type_name(&self, graphql_name: &str) -> Option<&str> {
        self.get(graphql_name).map(|info| info.type_name.as_str())
    }

    /// Iterates enums in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &EnumInfo> {
        self.enums.iter()
    }

    /// Returns the number of enums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    /// Returns true if the document declares no enums.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlgen_schema::{Definition, Field, TypeRef};

    fn create_test_doc() -> SchemaDocument {
        SchemaDocument::new(vec![
            Definition::enumeration("Status", ["ACTIVE", "DONE"]),
            Definition::object(
                "Task",
                vec![Field::new("status", TypeRef::named("Status"))],
            ),
            Definition::enumeration("Priority", ["LOW", "HIGH"]),
        ])
    }

    #[test]
    fn test_catalog_preserves_definition_order() {
        let catalog = EnumCatalog::from_document(&create_test_doc());
        let names: Vec<_> = catalog.iter().map(|e| e.type_name.as_str()).collect();
        assert_eq!(names, vec!["EnumStatus", "EnumPriority"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = EnumCatalog::from_document(&create_test_doc());
        assert_eq!(catalog.type_name("Status"), Some("EnumStatus"));
        assert_eq!(catalog.type_name("Task"), None);
        assert_eq!(
            catalog.get("Priority").expect("Priority").values,
            vec!["LOW", "HIGH"]
        );
    }

    #[test]
    fn test_enum_declarations() {
        let info = EnumInfo::new("Status", vec!["ACTIVE".to_string(), "DONE".to_string()]);
        assert_eq!(info.type_declaration(), "type EnumStatus string");
        assert_eq!(info.const_name("ACTIVE"), "EnumStatusACTIVE");
        assert_eq!(
            info.const_declaration("DONE"),
            "const EnumStatusDONE EnumStatus = \"DONE\""
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = EnumCatalog::from_document(&SchemaDocument::default());
        assert!(catalog.is_empty());
        assert!(catalog.get("Status").is_none());
    }
}
