//! Registry of declared Go identifiers.

use crate::error::CodegenError;
use std::collections::HashSet;

/// Tracks every identifier declared in one generated file.
#[derive(Debug, Default)]
pub struct KeywordRegistry {
    declared: HashSet<String>,
}

impl KeywordRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declaration.
    ///
    /// # Errors
    /// Returns `CodegenError::DuplicateDeclaration` if `name` was already declared.
    pub fn declare(&mut self, name: &str) -> Result<(), CodegenError> {
        if !self.declared.insert(name.to_string()) {
            return Err(CodegenError::duplicate(name));
        }
        Ok(())
    }

    /// Returns true if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Returns the requested names that were never declared, in request order.
    #[must_use]
    pub fn missing(&self, requested: &[String]) -> Vec<String> {
        requested
            .iter()
            .filter(|name| !self.contains(name))
            .cloned()
            .collect()
    }

    /// Returns the number of declared identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    /// Returns true if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
