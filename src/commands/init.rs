//! Implementation of the `extractor-scaffold init` command.
//!
//! Writes the commented starter configuration into the extractor directory.
//! The command is idempotent: an existing configuration is left untouched.

use super::ExtractorPaths;
use crate::cli::InitArgs;
use crate::config::CONFIG_TEMPLATE;
use crate::error::Result;
use crate::fs::atomic_write_file;

pub fn cmd_init(args: InitArgs) -> Result<()> {
    let paths = ExtractorPaths::resolve(&args.location)?;

    if paths.config.exists() {
        println!(
            "Configuration already exists: \"{}\"",
            paths.config.display()
        );
        return Ok(());
    }

    atomic_write_file(&paths.config, CONFIG_TEMPLATE)?;

    println!("Created configuration: \"{}\"", paths.config.display());
    println!();
    println!("Fill in the extractor name, description, author and repository,");
    println!("then run `extractor-scaffold` to generate the manifest and Dockerfile.");

    Ok(())
}
