//! Submodule detection.
//!
//! Decides whether the extractor directory is a git submodule nested inside a
//! parent project, and if so returns the relative folder path used for the
//! Dockerfile `submodule_home` variable and for file promotion.
//!
//! Detection order:
//! 1. A `submodule=<folder>` command-line hint is returned as-is, without
//!    consulting the filesystem or git.
//! 2. Otherwise the directory tree is walked upward from the extractor
//!    directory. At each directory holding a `.gitmodules` or `.git` marker,
//!    `git submodule status <extractor dir>` is run from that directory:
//!    - output mentioning `fatal` and `outside repository` ends the walk:
//!      not a submodule;
//!    - output containing ` <extractor folder name> ` means the extractor is
//!      a submodule of that directory.
//!
//! The walk passes directories to git explicitly and never changes the
//! process working directory.

mod hints;


pub use hints::submodule_hint;

use crate::error::{Result, ScaffoldError};
use crate::git;
use std::path::Path;

/// Files or directories whose presence marks a directory as worth querying.
const VCS_MARKERS: &[&str] = &[".gitmodules", ".git"];

/// Source of `submodule status` output for a directory.
pub trait SubmoduleStatus {
    /// Combined stdout/stderr of a submodule status query for `target`,
    /// run from `repo_dir`.
    fn submodule_status(&self, repo_dir: &Path, target: &Path) -> Result<String>;
}

/// Queries the `git` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl SubmoduleStatus for GitCli {
    fn submodule_status(&self, repo_dir: &Path, target: &Path) -> Result<String> {
        git::submodule_status(repo_dir, target)
    }
}

/// Resolve the submodule folder from command-line hints, falling back to detection.
///
/// # Returns
///
/// * `Ok(Some(path))` - The extractor is a submodule at `path`, relative to the parent project
/// * `Ok(None)` - The extractor is not a submodule
/// * `Err(ScaffoldError::UserError)` - Malformed `submodule=` hint
pub fn resolve_submodule_folder<S, Q>(
    hints: &[S],
    extractor_dir: &Path,
    query: &Q,
) -> Result<Option<String>>
where
    S: AsRef<str>,
    Q: SubmoduleStatus,
{
    if let Some(folder) = submodule_hint(hints)? {
        tracing::debug!(folder = %folder, "submodule folder given on the command line");
        return Ok(Some(folder));
    }

    detect_submodule_folder(extractor_dir, query)
}

/// Walk upward from `extractor_dir` looking for a parent project that lists it
/// as a submodule.
///
/// The returned path starts with `./`, names every directory between the
/// matching ancestor and the extractor directory (outermost first) and ends
/// with `/`.
pub fn detect_submodule_folder<Q: SubmoduleStatus>(
    extractor_dir: &Path,
    query: &Q,
) -> Result<Option<String>> {
    let start = extractor_dir.canonicalize().map_err(|e| {
        ScaffoldError::UserError(format!(
            "failed to resolve extractor directory '{}': {}",
            extractor_dir.display(),
            e
        ))
    })?;

    let Some(folder_name) = start.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Ok(None);
    };
    let needle = format!(" {} ", folder_name);

    // Directory names between the current folder and the start, innermost first.
    let mut visited: Vec<String> = Vec::new();
    let mut folder = start.as_path();

    while let Some(parent) = folder.parent() {
        if has_vcs_marker(folder) {
            let status = query.submodule_status(folder, &start)?;
            tracing::debug!(dir = %folder.display(), status = %status.trim(), "queried submodule status");

            if status.contains("fatal") && status.contains("outside repository") {
                tracing::debug!(dir = %folder.display(), "extractor is outside this repository");
                return Ok(None);
            }
            if status.contains(&needle) {
                return Ok(Some(relative_folder(&visited)));
            }
        }

        let name = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        visited.push(name);
        folder = parent;
    }

    tracing::debug!(start = %start.display(), "reached filesystem root without a parent project");
    Ok(None)
}

fn has_vcs_marker(dir: &Path) -> bool {
    VCS_MARKERS.iter().any(|marker| dir.join(marker).exists())
}

/// Build `./outer/.../inner/` from names collected innermost first.
fn relative_folder(visited: &[String]) -> String {
    let mut path = String::from("./");
    for name in visited.iter().rev() {
        path.push_str(name);
        path.push('/');
    }
    path
}
