//! The default run: detect, generate, patch, promote.
//!
//! 1. Resolve the submodule folder (command-line setting or detection)
//! 2. Load the extractor configuration
//! 3. Write `extractor_info.json`
//! 4. Write `Dockerfile` from `Dockerfile.template`
//! 5. When the extractor is a submodule, copy the generated files into the
//!    parent folder
//!
//! Validation failures in steps 3 and 4 abort the run. A failed promotion is
//! rolled back and reported, but the run still succeeds: the manifest and
//! Dockerfile stay on disk.

#[cfg(test)]
mod tests;

use super::ExtractorPaths;
use crate::cli::GenerateArgs;
use crate::config::ExtractorConfig;
use crate::dockerfile::{DOCKERFILE, DOCKERFILE_TEMPLATE, generate_dockerfile};
use crate::error::Result;
use crate::manifest::{MANIFEST_FILE, write_manifest};
use crate::promote::{PROMOTED_FILES, PromotionReport, promote_files};
use crate::submodule::{GitCli, SubmoduleStatus, resolve_submodule_folder};

/// Result of the promotion step.
#[derive(Debug)]
pub(crate) enum PromotionOutcome {
    Promoted(PromotionReport),
    RolledBack(String),
}

/// What a successful run did.
#[derive(Debug)]
pub(crate) struct GenerateOutcome {
    /// `None` when the extractor is not a submodule.
    pub promotion: Option<PromotionOutcome>,
}

pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let outcome = run_generate(&args, &GitCli)?;

    match outcome.promotion {
        Some(PromotionOutcome::Promoted(report)) => println!(
            "Promoted {} file(s) to the parent folder, kept {} existing",
            report.copied.len(),
            report.skipped.len()
        ),
        Some(PromotionOutcome::RolledBack(reason)) => {
            eprintln!("Warning: {}", reason);
            eprintln!("Generated files were left in the extractor folder only");
        }
        None => {}
    }

    Ok(())
}

pub(crate) fn run_generate<Q: SubmoduleStatus>(
    args: &GenerateArgs,
    query: &Q,
) -> Result<GenerateOutcome> {
    let paths = ExtractorPaths::resolve(&args.location)?;

    let submodule_folder = resolve_submodule_folder(&args.settings, &paths.dir, query)?;
    match &submodule_folder {
        Some(folder) => println!(
            "Configuring extractor as a git submodule with relative folder of \"{}\"",
            folder
        ),
        None => println!("Configuring extractor"),
    }

    let config = ExtractorConfig::load(&paths.config)?;

    write_manifest(&config, paths.file(MANIFEST_FILE))?;
    generate_dockerfile(
        &config,
        submodule_folder.as_deref(),
        paths.file(DOCKERFILE_TEMPLATE),
        paths.file(DOCKERFILE),
    )?;

    let promotion = match (&submodule_folder, paths.dir.parent()) {
        (Some(_), Some(parent)) => Some(match promote_files(&paths.dir, parent, PROMOTED_FILES) {
            Ok(report) => PromotionOutcome::Promoted(report),
            Err(e) => PromotionOutcome::RolledBack(e.to_string()),
        }),
        (Some(_), None) => {
            tracing::warn!(dir = %paths.dir.display(), "extractor directory has no parent; skipping promotion");
            None
        }
        (None, _) => None,
    };

    Ok(GenerateOutcome { promotion })
}
