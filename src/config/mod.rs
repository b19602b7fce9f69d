//! Extractor configuration model.
//!
//! This module defines the `ExtractorConfig` struct that represents the
//! human-edited `configuration.yaml` describing an extractor. Parsing is
//! forward-compatible (unknown fields are ignored) and every field has a
//! default, so a partially filled file still loads. Each generator declares
//! the fields it cannot run without and checks them with
//! [`ExtractorConfig::require`].

mod model;
mod operations;
mod template;


pub use model::ExtractorConfig;
pub use operations::RequiredField;
pub use template::CONFIG_TEMPLATE;

/// Default configuration file name, relative to the extractor directory.
pub const DEFAULT_CONFIG_FILE: &str = "configuration.yaml";
