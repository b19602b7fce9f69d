//! CLI argument parsing for extractor-scaffold.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate an extractor's manifest and Dockerfile from its configuration.
///
/// Without a subcommand, reads `configuration.yaml`, writes
/// `extractor_info.json` and `Dockerfile` (from `Dockerfile.template`), and,
/// when the extractor is a git submodule, copies the generated files into the
/// parent folder.
#[derive(Parser, Debug)]
#[command(name = "extractor-scaffold")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence when set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter configuration file.
    ///
    /// Never overwrites an existing configuration.
    Init(InitArgs),
}

/// Location of the extractor and its configuration.
#[derive(Args, Debug, Clone)]
pub struct ExtractorDirArgs {
    /// Extractor directory (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Configuration file, relative to the extractor directory.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Arguments for the default generate run.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub location: ExtractorDirArgs,

    /// `key=value` settings. `submodule=<folder>` skips submodule detection
    /// and uses <folder> as the submodule path.
    #[arg(value_name = "SETTING")]
    pub settings: Vec<String>,
}

/// Arguments for the `init` command.
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    #[command(flatten)]
    pub location: ExtractorDirArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
