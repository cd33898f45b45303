//! Run configuration.
//!
//! A run reads one merged set of schemas and writes any number of Go files,
//! each with its own package name and entity selection. The configuration can
//! be built in code or loaded from TOML:
//!
//! ```toml
//! schemas = ["schema/base.graphql", "schema/orders.graphql"]
//!
//! [[outputs]]
//! output_path = "models/orders.go"
//! package_name = "models"
//! entities = ["Order"]
//! ```

use crate::error::GqlgenError;
use gqlgen_codegen::GeneratorConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema files, merged in order.
    pub schemas: Vec<PathBuf>,
    /// Files to generate.
    #[serde(default)]
    pub outputs: Vec<OutputItem>,
}

/// One generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputItem {
    /// Destination path.
    pub output_path: PathBuf,
    /// Go package name.
    pub package_name: String,
    /// Entities to generate; empty means all.
    #[serde(default)]
    pub entities: Vec<String>,
    /// Skip the generated-code header.
    #[serde(default)]
    pub disable_header: bool,
}

impl Config {
    /// Parses a TOML configuration.
    ///
    /// # Errors
    /// Returns `GqlgenError::ConfigParse` for invalid TOML or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, GqlgenError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    /// Returns `GqlgenError::ConfigRead` if the file cannot be read, or
    /// `GqlgenError::ConfigParse` if it is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GqlgenError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GqlgenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Checks that every required setting is present.
    ///
    /// # Errors
    /// Returns `GqlgenError::Config` naming the first missing setting.
    pub fn validate(&self) -> Result<(), GqlgenError> {
        if self.schemas.is_empty() {
            return Err(GqlgenError::config("schemas not defined"));
        }
        if self.outputs.is_empty() {
            return Err(GqlgenError::config("outputs not defined"));
        }
        for output in &self.outputs {
            output.validate()?;
        }
        Ok(())
    }
}

impl OutputItem {
    /// Creates an output that generates every entity.
    #[must_use]
    pub fn new(output_path: impl Into<PathBuf>, package_name: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            package_name: package_name.into(),
            ..Self::default()
        }
    }

    /// Checks the package name and output path.
    ///
    /// # Errors
    /// Returns `GqlgenError::Config` if either is empty.
    pub fn validate(&self) -> Result<(), GqlgenError> {
        if self.package_name.is_empty() {
            return Err(GqlgenError::config("packageName not defined"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(GqlgenError::config("outputFile not defined"));
        }
        Ok(())
    }

    /// Returns the generator settings for this output.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.package_name.clone())
            .entities(self.entities.iter().cloned())
            .disable_header(self.disable_header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
schemas = ["a.graphql", "b.graphql"]

[[outputs]]
output_path = "models.go"
package_name = "models"
entities = ["Person"]

[[outputs]]
output_path = "all.go"
package_name = "all"
disable_header = true
"#,
        )
        .expect("Failed to parse config");

        assert_eq!(
            config.schemas,
            vec![PathBuf::from("a.graphql"), PathBuf::from("b.graphql")]
        );
        assert_eq!(config.outputs.len(), 2);
        assert_eq!(config.outputs[0].entities, vec!["Person"]);
        assert!(!config.outputs[0].disable_header);
        assert!(config.outputs[1].entities.is_empty());
        assert!(config.outputs[1].disable_header);
        config.validate().expect("valid config");
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let result = Config::from_toml("schemas = [\"a.graphql\"]\nschema_url = \"x\"\n");
        assert!(matches!(result, Err(GqlgenError::ConfigParse(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/gqlgen.toml");
        assert!(matches!(result, Err(GqlgenError::ConfigRead { .. })));
    }

    #[test]
    fn test_validate_missing_settings() {
        let empty = Config::default();
        assert!(matches!(empty.validate(), Err(GqlgenError::Config { .. })));

        let no_package = Config {
            schemas: vec!["a.graphql".into()],
            outputs: vec![OutputItem::new("out.go", "")],
        };
        match no_package.validate() {
            Err(GqlgenError::Config { message }) => assert_eq!(message, "packageName not defined"),
            other => panic!("expected config error, got {:?}", other),
        }

        let no_path = Config {
            schemas: vec!["a.graphql".into()],
            outputs: vec![OutputItem::new("", "models")],
        };
        match no_path.validate() {
            Err(GqlgenError::Config { message }) => assert_eq!(message, "outputFile not defined"),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_generator_config() {
        let item = OutputItem {
            entities: vec!["Person".to_string()],
            disable_header: true,
            ..OutputItem::new("out.go", "models")
        };
        let config = item.generator_config();
        assert_eq!(config.package_name, "models");
        assert_eq!(config.entities, vec!["Person"]);
        assert!(config.disable_header);
    }
}
