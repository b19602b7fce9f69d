//! Error types for the extractor-scaffold CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for scaffolding operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// User provided invalid arguments, or an input file is missing or malformed.
    #[error("{0}")]
    UserError(String),

    /// Required configuration fields are empty. Every missing field is listed.
    #[error(
        "one or more configuration fields aren't defined in the configuration file: {}",
        .0.join(", ")
    )]
    MissingFields(Vec<String>),

    /// The git binary could not be executed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Promotion of generated files was aborted and rolled back.
    ///
    /// The run pipeline reports this without failing the run.
    #[error("File promotion failed: {0}")]
    PromotionFailed(String),
}

impl ScaffoldError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::UserError(_) => exit_codes::USER_ERROR,
            ScaffoldError::MissingFields(_) => exit_codes::VALIDATION_FAILURE,
            ScaffoldError::GitError(_) => exit_codes::GIT_FAILURE,
            ScaffoldError::PromotionFailed(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
