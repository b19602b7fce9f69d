//! extractor-scaffold: generates extractor manifests and Dockerfiles.
//!
//! This is the main entry point for the `extractor-scaffold` CLI. It parses
//! arguments, sets up logging, dispatches to the command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod dockerfile;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod manifest;
pub mod promote;
pub mod submodule;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
