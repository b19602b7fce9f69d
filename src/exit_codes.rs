//! Exit code constants for the extractor-scaffold CLI.
//!
//! - 0: Success (including a rolled-back file promotion)
//! - 1: User error (bad args, unreadable files, malformed configuration)
//! - 2: Validation failure (required configuration fields missing)
//! - 3: Git invocation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing input files, or unparsable configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: one or more required configuration fields are empty.
pub const VALIDATION_FAILURE: i32 = 2;

/// Git invocation failure: the git binary could not be executed.
pub const GIT_FAILURE: i32 = 3;
