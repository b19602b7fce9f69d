//! Git command runner.
//!
//! Wraps git subprocesses with captured stdout/stderr. Directories are passed
//! to git explicitly; nothing here changes the process working directory.

use crate::error::{Result, ScaffoldError};
use std::path::Path;
use std::process::{Command, Output};

/// Captured result of a git command, successful or not.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output, untrimmed.
    pub stdout: String,
    /// Standard error, untrimmed.
    pub stderr: String,
    /// Exit code, or `None` if git was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        }
    }

    /// Returns true if git exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Standard output followed by standard error, as a single text blob.
    ///
    /// Callers that classify git's response by its wording need both streams:
    /// git reports `fatal:` conditions on stderr.
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        text.push_str(&self.stderr);
        text
    }
}

/// Run a git command in `cwd` without treating a non-zero exit as an error.
///
/// # Returns
///
/// * `Ok(GitOutput)` - Git ran; inspect `exit_code` and the captured streams
/// * `Err(ScaffoldError::GitError)` - The git binary could not be executed
pub fn run_git_unchecked<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            ScaffoldError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    Ok(GitOutput::from_output(&output))
}

/// Run `git submodule status <target>` from `repo_dir` and return its combined output.
pub fn submodule_status<P: AsRef<Path>, Q: AsRef<Path>>(repo_dir: P, target: Q) -> Result<String> {
    let target = target.as_ref().to_string_lossy();
    let output = run_git_unchecked(repo_dir, &["submodule", "status", &target])?;
    if !output.success() {
        tracing::debug!(exit_code = ?output.exit_code, "git submodule status exited with failure");
    }
    Ok(output.combined())
}
