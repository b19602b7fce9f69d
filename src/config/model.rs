//! ExtractorConfig struct definition and default implementation.

use serde::{Deserialize, Deserializer, Serialize};

/// Metadata describing one extractor.
///
/// Loaded once per invocation and passed by reference to the manifest and
/// Dockerfile generators. Unknown fields in the YAML are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    // =========================================================================
    // Identity
    // =========================================================================
    /// Name of the extractor. Alphanumerics, hyphens and underscores are expected.
    #[serde(deserialize_with = "null_as_empty")]
    pub extractor_name: String,

    /// Name of the scientific method implemented, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,

    /// Extractor version (default: "1.0").
    #[serde(default = "default_version", deserialize_with = "null_as_empty")]
    pub version: String,

    /// Free-form description of the extractor.
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,

    // =========================================================================
    // Authorship
    // =========================================================================
    #[serde(deserialize_with = "null_as_empty")]
    pub author_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub author_email: String,

    /// URI of the repository holding the extractor source.
    #[serde(deserialize_with = "null_as_empty")]
    pub repository: String,

    // =========================================================================
    // Citation
    // =========================================================================
    #[serde(deserialize_with = "null_as_empty")]
    pub citation_author: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub citation_title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub citation_year: String,

    // =========================================================================
    // Outputs
    // =========================================================================
    /// Comma-separated output variable names. Whitespace is significant.
    #[serde(deserialize_with = "null_as_empty")]
    pub variable_names: String,

    /// Never write to the Geostreams database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never_write_geostreams: Option<bool>,

    /// Never write to BETYdb.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never_write_betydb: Option<bool>,

    /// Never write CSV files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never_write_csv: Option<bool>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            extractor_name: String::new(),
            method_name: None,
            version: default_version(),
            description: String::new(),
            author_name: String::new(),
            author_email: String::new(),
            repository: String::new(),
            citation_author: String::new(),
            citation_title: String::new(),
            citation_year: String::new(),
            variable_names: String::new(),
            never_write_geostreams: None,
            never_write_betydb: None,
            never_write_csv: None,
        }
    }
}

pub(crate) fn default_version() -> String {
    "1.0".to_string()
}

/// A YAML null (`~`, `null` or a bare key) reads as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
