//! Schema document model.
//!
//! This module contains the immutable, parser-independent representation of a
//! GraphQL schema that the code generator consumes: an ordered list of named
//! definitions, their fields, union members and enum values.

/// Root type names for read and write operations.
pub const ROOT_OPERATION_TYPES: [&str; 2] = ["Query", "Mutation"];

/// Complete parsed schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDocument {
    /// Definitions in source order.
    pub definitions: Vec<Definition>,
}

impl SchemaDocument {
    /// Creates a document from a list of definitions.
    #[must_use]
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Looks up the first definition with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Returns an iterator over all enum definitions, in source order.
    pub fn enums(&self) -> impl Iterator<Item = &Definition> {
        self.definitions
            .iter()
            .filter(|d| d.kind == DefinitionKind::Enum)
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the document has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Kind of a schema definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// `type Foo { ... }`
    Object,
    /// `input Foo { ... }`
    InputObject,
    /// `union Foo = A | B`
    Union,
    /// `enum Foo { ... }`
    Enum,
    /// Scalars, interfaces and anything else the generator ignores.
    Other,
}

impl DefinitionKind {
    /// Returns true for kinds that declare fields.
    #[must_use]
    pub const fn has_fields(self) -> bool {
        matches!(self, Self::Object | Self::InputObject)
    }
}

/// A named schema definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Definition name.
    pub name: String,
    /// Definition kind.
    pub kind: DefinitionKind,
    /// Fields (objects and input objects).
    pub fields: Vec<Field>,
    /// Member type names (unions).
    pub types: Vec<String>,
    /// Value names (enums).
    pub enum_values: Vec<String>,
}

impl Definition {
    fn empty(name: impl Into<String>, kind: DefinitionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
            types: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    /// Creates an object type definition.
    #[must_use]
    pub fn object(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            fields,
            ..Self::empty(name, DefinitionKind::Object)
        }
    }

    /// Creates an input object definition.
    #[must_use]
    pub fn input_object(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            fields,
            ..Self::empty(name, DefinitionKind::InputObject)
        }
    }

    /// Creates a union definition.
    #[must_use]
    pub fn union<S: Into<String>>(
        name: impl Into<String>,
        members: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            types: members.into_iter().map(Into::into).collect(),
            ..Self::empty(name, DefinitionKind::Union)
        }
    }

    /// Creates an enum definition.
    #[must_use]
    pub fn enumeration<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            enum_values: values.into_iter().map(Into::into).collect(),
            ..Self::empty(name, DefinitionKind::Enum)
        }
    }

    /// Creates a definition the generator ignores (scalar, interface).
    #[must_use]
    pub fn other(name: impl Into<String>) -> Self {
        Self::empty(name, DefinitionKind::Other)
    }

    /// Returns true if this is the `Query` or `Mutation` root type.
    #[must_use]
    pub fn is_root_operation(&self) -> bool {
        ROOT_OPERATION_TYPES.contains(&self.name.as_str())
    }
}

/// A field of an object or input object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as written in the schema.
    pub name: String,
    /// Field type reference.
    pub field_type: TypeRef,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Reference to a type from a field.
///
/// `name` is always the innermost named type, so `[User!]!` has the name
/// `User` with an `elem` describing the `User!` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Base type name.
    pub name: String,
    /// Whether the reference is marked non-null (`!`).
    pub non_null: bool,
    /// Element type when this reference is a list.
    pub elem: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// Creates a nullable named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            non_null: false,
            elem: None,
        }
    }

    /// Creates a nullable list of the given element.
    #[must_use]
    pub fn list(elem: TypeRef) -> Self {
        Self {
            name: elem.name.clone(),
            non_null: false,
            elem: Some(Box::new(elem)),
        }
    }

    /// Marks this reference as non-null.
    #[must_use]
    pub fn non_null(mut self) -> Self {
        self.non_null = true;
        self
    }

    /// Returns true if this reference is a list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.elem.is_some()
    }
}
