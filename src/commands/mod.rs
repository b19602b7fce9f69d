//! Command implementations for extractor-scaffold.
//!
//! This module provides the dispatcher that routes parsed CLI arguments to
//! their implementations.

mod generate;
mod init;

use crate::cli::{Cli, Command, ExtractorDirArgs};
use crate::error::{Result, ScaffoldError};
use std::path::PathBuf;

/// Dispatch a command to its implementation.
///
/// Without a subcommand the generate pipeline runs.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Init(args)) => init::cmd_init(args),
        None => generate::cmd_generate(cli.generate),
    }
}

/// Resolved extractor directory and configuration file.
#[derive(Debug, Clone)]
pub(crate) struct ExtractorPaths {
    pub dir: PathBuf,
    pub config: PathBuf,
}

impl ExtractorPaths {
    /// Resolve `--dir` (default: current directory) and `--config` (relative to the directory).
    ///
    /// The directory is canonicalized so its parent is always a real folder.
    pub fn resolve(args: &ExtractorDirArgs) -> Result<Self> {
        let dir = match &args.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| {
                ScaffoldError::UserError(format!("failed to determine current directory: {}", e))
            })?,
        };
        let dir = dir.canonicalize().map_err(|e| {
            ScaffoldError::UserError(format!(
                "extractor directory '{}' is not accessible: {}",
                dir.display(),
                e
            ))
        })?;

        let config = dir.join(&args.config);
        Ok(Self { dir, config })
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}
