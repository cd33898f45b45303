//! Generator configuration.

/// Selection parameters for one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Go package name written in the header.
    pub package_name: String,
    /// Entities to generate; empty means every definition.
    pub entities: Vec<String>,
    /// Skip the generated-code header and package clause.
    pub disable_header: bool,
}

impl GeneratorConfig {
    /// Creates a configuration that generates everything into `package_name`.
    #[must_use]
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            entities: Vec::new(),
            disable_header: false,
        }
    }

    /// Restricts generation to `entities` and their dependencies.
    #[must_use]
    pub fn entities<S: Into<String>>(mut self, entities: impl IntoIterator<Item = S>) -> Self {
        self.entities = entities.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables the header.
    #[must_use]
    pub fn disable_header(mut self, disable: bool) -> Self {
        self.disable_header = disable;
        self
    }

    /// Returns true if an entity filter is set.
    #[must_use]
    pub fn has_filter(&self) -> bool {
        !self.entities.is_empty()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new("main")
    }
}
