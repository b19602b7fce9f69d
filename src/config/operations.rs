//! Config loading and derived values.

use super::model::ExtractorConfig;
use crate::error::{Result, ScaffoldError};
use std::path::Path;

impl ExtractorConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(ExtractorConfig)` - Successfully loaded config
    /// * `Err(ScaffoldError::UserError)` - Read or parse failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to read configuration file '{}': {}\n\
                 Run `extractor-scaffold init` to create a starter configuration.",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| {
            ScaffoldError::UserError(format!("failed to parse configuration YAML: {}", e))
        })
    }

    /// Author identity as `Name <email>`.
    ///
    /// Used for both the manifest `author` field and the Dockerfile maintainer.
    pub fn maintainer(&self) -> String {
        format!("{} <{}>", self.author_name, self.author_email)
    }

    /// Extractor name normalized for use in a message queue name.
    ///
    /// Surrounding whitespace is trimmed, each space, tab, newline and carriage
    /// return becomes `_`, and the result is lowercased.
    pub fn queue_name(&self) -> String {
        self.extractor_name
            .trim()
            .replace([' ', '\t', '\n', '\r'], "_")
            .to_lowercase()
    }
}

/// A configuration field that a generator refuses to run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    ExtractorName,
    Version,
    Description,
    AuthorName,
    AuthorEmail,
    Repository,
}

impl RequiredField {
    /// Human-readable field name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::ExtractorName => "Extractor name",
            RequiredField::Version => "Extractor version",
            RequiredField::Description => "Extractor description",
            RequiredField::AuthorName => "Author name",
            RequiredField::AuthorEmail => "Author email",
            RequiredField::Repository => "Repository",
        }
    }

    fn value(self, config: &ExtractorConfig) -> &str {
        match self {
            RequiredField::ExtractorName => &config.extractor_name,
            RequiredField::Version => &config.version,
            RequiredField::Description => &config.description,
            RequiredField::AuthorName => &config.author_name,
            RequiredField::AuthorEmail => &config.author_email,
            RequiredField::Repository => &config.repository,
        }
    }
}

impl ExtractorConfig {
    /// Check that every listed field is non-empty.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All fields are present
    /// * `Err(ScaffoldError::MissingFields)` - Labels of every empty field, in
    ///   the order they were listed
    pub fn require(&self, fields: &[RequiredField]) -> Result<()> {
        let missing: Vec<String> = fields
            .iter()
            .filter(|field| field.value(self).is_empty())
            .map(|field| field.label().to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ScaffoldError::MissingFields(missing))
        }
    }
}
