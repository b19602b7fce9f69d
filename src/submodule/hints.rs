//! `key=value` command-line hints.

use crate::error::{Result, ScaffoldError};

/// Hint key that overrides submodule detection.
pub const SUBMODULE_HINT: &str = "submodule";

/// Extract the submodule folder from `key=value` hints.
///
/// Hints without `=` and hints with other keys are ignored. The first
/// `submodule=` hint wins. When a hint carries more than one `=`, only the
/// text between the first and second `=` is used as the folder.
///
/// # Returns
///
/// * `Ok(Some(folder))` - A `submodule=<folder>` hint was given
/// * `Ok(None)` - No submodule hint
/// * `Err(ScaffoldError::UserError)` - `submodule=` was given without a folder
pub fn submodule_hint<S: AsRef<str>>(hints: &[S]) -> Result<Option<String>> {
    for hint in hints {
        let hint = hint.as_ref();
        if !hint.contains('=') {
            continue;
        }

        let mut parts = hint.split('=');
        if parts.next() != Some(SUBMODULE_HINT) {
            continue;
        }

        return match parts.next() {
            Some(folder) if !folder.is_empty() => Ok(Some(folder.to_string())),
            _ => Err(ScaffoldError::UserError(
                "Missing submodule parameter folder: \"submodule=<folder>\"".to_string(),
            )),
        };
    }

    Ok(None)
}
