//! Entity dependency resolution.
//!
//! Callers only name the entities they use directly. Their fields may refer to
//! other objects, unions and enums, which must be generated too for the output
//! to compile. This module computes that closure.

use crate::go::enums::EnumCatalog;
use gqlgen_schema::{DefinitionKind, SchemaDocument};
use std::collections::{HashMap, HashSet};

/// Ordered, de-duplicated set of entity names to generate.
///
/// Enum entries hold the synthesized Go type name (`EnumX`), not the GraphQL
/// name. Names of scalars and unknown types may be present; they never match
/// a definition and are harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEntities {
    names: Vec<String>,
    members: HashSet<String>,
}

impl ResolvedEntities {
    fn push(&mut self, name: &str) {
        if self.members.insert(name.to_string()) {
            self.names.push(name.to_string());
        }
    }

    /// Returns true if `name` is part of the closure.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Iterates names in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Builds the outgoing edges of every definition.
///
/// Object and input fields point at their base type (the synthetic enum name
/// for enum fields); unions point at their members.
fn dependency_graph<'d>(
    doc: &'d SchemaDocument,
    enums: &'d EnumCatalog,
) -> HashMap<&'d str, Vec<&'d str>> {
    let mut depends_on: HashMap<&str, Vec<&str>> = HashMap::new();

    for def in &doc.definitions {
        let edges = depends_on.entry(def.name.as_str()).or_default();
        match def.kind {
            DefinitionKind::Object | DefinitionKind::InputObject => {
                for field in &def.fields {
                    let base = field.field_type.name.as_str();
                    edges.push(enums.type_name(base).unwrap_or(base));
                }
            }
            DefinitionKind::Union => edges.extend(def.types.iter().map(String::as_str)),
            DefinitionKind::Enum | DefinitionKind::Other => {}
        }
    }

    depends_on
}

/// Computes the transitive closure of `requested` over field and union
/// member references.
///
/// Each name is expanded at most once, so reference cycles terminate.
#[must_use]
pub fn resolve_dependencies(
    doc: &SchemaDocument,
    requested: &[String],
    enums: &EnumCatalog,
) -> ResolvedEntities {
    let depends_on = dependency_graph(doc, enums);

    let mut resolved = ResolvedEntities::default();
    for name in requested {
        resolved.push(name);
    }

    let mut expanded: HashSet<String> = HashSet::new();
    let mut cursor = 0;
    while cursor < resolved.names.len() {
        let name = resolved.names[cursor].clone();
        cursor += 1;

        let Some(edges) = depends_on.get(name.as_str()) else {
            continue;
        };
        if !expanded.insert(name) {
            continue;
        }
        for edge in edges {
            resolved.push(edge);
        }
    }

    tracing::debug!(
        "Resolved {} requested entities to {} names",
        requested.len(),
        resolved.len()
    );

    resolved
}
