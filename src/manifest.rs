//! Extractor manifest (`extractor_info.json`) generation.
//!
//! The manifest is a fixed template describing the extractor to the host
//! platform. Only `name`, `version`, `description`, `author` and
//! `repository.repUrl` come from the configuration; everything else is
//! constant. Field order in the structs is the key order of the output.

use crate::config::{ExtractorConfig, RequiredField};
use crate::error::{Result, ScaffoldError};
use crate::fs::atomic_write_file;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

/// Manifest file name written into the extractor directory.
pub const MANIFEST_FILE: &str = "extractor_info.json";

/// JSON-LD context of the extractor manifest schema.
pub const MANIFEST_CONTEXT: &str = "http://clowder.ncsa.illinois.edu/contexts/extractors.jsonld";

/// Event that triggers the extractor on the host platform.
pub const PROCESS_TRIGGER: &str = "file.added";

/// Fields the manifest cannot be generated without, in report order.
pub const MANIFEST_REQUIRED_FIELDS: &[RequiredField] = &[
    RequiredField::ExtractorName,
    RequiredField::Version,
    RequiredField::Description,
    RequiredField::AuthorName,
    RequiredField::AuthorEmail,
    RequiredField::Repository,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorInfo {
    #[serde(rename = "@context")]
    pub context: String,
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub contributors: Vec<String>,
    pub contexts: Vec<serde_json::Value>,
    pub repository: Repository,
    pub process: Process,
    pub external_services: Vec<String>,
    pub dependencies: Vec<String>,
    pub bibtex: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "repType")]
    pub rep_type: String,
    #[serde(rename = "repUrl")]
    pub rep_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub dataset: Vec<String>,
}

impl ExtractorInfo {
    /// The base template, with every configurable field unset (`null`).
    pub fn template() -> Self {
        Self {
            context: MANIFEST_CONTEXT.to_string(),
            name: None,
            version: None,
            description: None,
            author: None,
            contributors: Vec::new(),
            contexts: Vec::new(),
            repository: Repository {
                rep_type: "git".to_string(),
                rep_url: None,
            },
            process: Process {
                dataset: vec![PROCESS_TRIGGER.to_string()],
            },
            external_services: Vec::new(),
            dependencies: Vec::new(),
            bibtex: Vec::new(),
        }
    }

    /// Build the manifest for `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(ExtractorInfo)` - The template with the configured fields filled in
    /// * `Err(ScaffoldError::MissingFields)` - Every empty required field
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        config.require(MANIFEST_REQUIRED_FIELDS)?;

        let mut info = Self::template();
        info.name = Some(config.extractor_name.clone());
        info.version = Some(config.version.clone());
        info.description = Some(config.description.clone());
        info.author = Some(config.maintainer());
        info.repository.rep_url = Some(config.repository.clone());
        Ok(info)
    }

    /// Serialize with four-space indentation and a single trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer).map_err(|e| {
            ScaffoldError::UserError(format!("failed to serialize extractor manifest: {}", e))
        })?;

        let mut json = String::from_utf8(buf).map_err(|e| {
            ScaffoldError::UserError(format!("extractor manifest is not valid UTF-8: {}", e))
        })?;
        json.push('\n');
        Ok(json)
    }
}

/// Validate `config` and write its manifest to `path`, replacing any existing file.
///
/// Nothing is written when validation fails.
pub fn write_manifest<P: AsRef<Path>>(config: &ExtractorConfig, path: P) -> Result<ExtractorInfo> {
    let path = path.as_ref();
    let info = ExtractorInfo::from_config(config)?;
    atomic_write_file(path, &info.to_json()?)?;
    tracing::debug!(path = %path.display(), "wrote extractor manifest");
    Ok(info)
}
