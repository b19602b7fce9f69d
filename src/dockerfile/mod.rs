//! Dockerfile generation from `Dockerfile.template`.
//!
//! The template is processed line by line through [`rules::RULES`]:
//! the `MAINTAINER` line gets the configured author, an `ENV ... submodule_home`
//! line gets the detected submodule folder, and the `RABBITMQ_QUEUE` setting
//! gets a queue name derived from the extractor name. Every other line is
//! copied verbatim. Output lines always end with a single `\n`.

pub mod rules;


use crate::config::{ExtractorConfig, RequiredField};
use crate::error::{Result, ScaffoldError};
use crate::fs::atomic_write_file;
use std::path::Path;

pub use rules::{PatchContext, apply_rules};

/// Template read from the extractor directory.
pub const DOCKERFILE_TEMPLATE: &str = "Dockerfile.template";

/// Generated Dockerfile name.
pub const DOCKERFILE: &str = "Dockerfile";

/// Fields the Dockerfile cannot be generated without, in report order.
pub const DOCKERFILE_REQUIRED_FIELDS: &[RequiredField] = &[
    RequiredField::ExtractorName,
    RequiredField::AuthorName,
    RequiredField::AuthorEmail,
];

impl PatchContext {
    /// Build the substitution values for `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(PatchContext)` - Identity fields are present
    /// * `Err(ScaffoldError::MissingFields)` - Every empty identity field
    pub fn from_config(config: &ExtractorConfig, submodule_folder: Option<&str>) -> Result<Self> {
        config.require(DOCKERFILE_REQUIRED_FIELDS)?;

        Ok(Self {
            maintainer: config.maintainer(),
            submodule_folder: submodule_folder.map(str::to_string),
            queue_name: config.queue_name(),
        })
    }
}

/// Rewrite every line of `template`.
pub fn patch_template(template: &str, ctx: &PatchContext) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    for line in template.lines() {
        out.push_str(&apply_rules(line, ctx));
        out.push('\n');
    }
    out
}

/// Generate `output` from `template_path`.
///
/// Validation happens before the template is read, so a configuration missing
/// identity fields never produces or touches the output file.
pub fn generate_dockerfile<P: AsRef<Path>, Q: AsRef<Path>>(
    config: &ExtractorConfig,
    submodule_folder: Option<&str>,
    template_path: P,
    output: Q,
) -> Result<()> {
    let template_path = template_path.as_ref();
    let output = output.as_ref();

    let ctx = PatchContext::from_config(config, submodule_folder)?;

    let template = std::fs::read_to_string(template_path).map_err(|e| {
        ScaffoldError::UserError(format!(
            "failed to read Dockerfile template '{}': {}",
            template_path.display(),
            e
        ))
    })?;

    atomic_write_file(output, &patch_template(&template, &ctx))?;
    tracing::debug!(path = %output.display(), "wrote Dockerfile");
    Ok(())
}
