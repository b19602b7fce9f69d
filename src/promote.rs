//! Promotion of generated files into the parent project.
//!
//! When the extractor is a submodule, a few generated files are copied into
//! the parent directory so the parent project can build the extractor.
//! Promotion is all-or-nothing over the files copied by this invocation:
//! if any copy fails, every file copied so far is deleted again. Files that
//! already existed in the parent directory are never overwritten or removed.

use crate::error::{Result, ScaffoldError};
use crate::manifest::MANIFEST_FILE;
use std::fs;
use std::path::{Path, PathBuf};

/// Extractor entry point promoted alongside the manifest.
pub const EXTRACTOR_SOURCE: &str = "extractor.py";

/// Files promoted to the parent directory, in copy order.
pub const PROMOTED_FILES: &[&str] = &[MANIFEST_FILE, EXTRACTOR_SOURCE];

/// What a successful promotion did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PromotionReport {
    /// Destination paths created by this run.
    pub copied: Vec<PathBuf>,
    /// Destination paths left alone because they already existed.
    pub skipped: Vec<PathBuf>,
}

/// Files copied so far, for rollback.
struct PromotionTransaction {
    copied: Vec<PathBuf>,
}

impl PromotionTransaction {
    fn new() -> Self {
        Self { copied: Vec::new() }
    }

    fn record(&mut self, dest: PathBuf) {
        self.copied.push(dest);
    }

    /// Delete every file copied in this transaction.
    fn rollback(self) {
        if self.copied.is_empty() {
            return;
        }

        println!("Errors detected. Cleaning up copied files");
        for file in self.copied {
            println!("  Deleting: \"{}\"", file.display());
            // Best effort; the copy failure is what gets reported.
            if let Err(e) = fs::remove_file(&file) {
                tracing::warn!(path = %file.display(), error = %e, "failed to remove promoted file");
            }
        }
    }
}

/// Copy `files` from `source_dir` into `parent_dir`.
///
/// # Returns
///
/// * `Ok(PromotionReport)` - Every file was copied or already present
/// * `Err(ScaffoldError::PromotionFailed)` - A copy failed; files copied by
///   this call have been removed again
pub fn promote_files<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    parent_dir: Q,
    files: &[&str],
) -> Result<PromotionReport> {
    promote_files_with(source_dir.as_ref(), parent_dir.as_ref(), files, |from, to| {
        fs::copy(from, to).map(|_| ())
    })
}

fn promote_files_with<F>(
    source_dir: &Path,
    parent_dir: &Path,
    files: &[&str],
    mut copy: F,
) -> Result<PromotionReport>
where
    F: FnMut(&Path, &Path) -> std::io::Result<()>,
{
    let mut tx = PromotionTransaction::new();
    let mut skipped = Vec::new();

    for file in files {
        let source = source_dir.join(file);
        let dest = parent_dir.join(file);

        if dest.is_file() {
            println!("Not overwriting destination file: \"{}\"", dest.display());
            println!("  Remove the file if you want it updated");
            skipped.push(dest);
            continue;
        }

        println!(
            "Copying: \"{}\" to parent folder: \"{}\"",
            file,
            parent_dir.display()
        );
        let existed = dest.exists();
        if let Err(e) = copy(&source, &dest) {
            // A partially written destination belongs to this run.
            if !existed && dest.is_file() {
                tx.record(dest.clone());
            }
            tx.rollback();
            return Err(ScaffoldError::PromotionFailed(format!(
                "failed to copy '{}' to '{}': {}",
                source.display(),
                dest.display(),
                e
            )));
        }
        tx.record(dest);
    }

    Ok(PromotionReport {
        copied: tx.copied,
        skipped,
    })
}
