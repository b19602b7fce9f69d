//! Atomic replacement of generated files.
//!
//! Content goes to `.{filename}.tmp` next to the target, is synced, then
//! renamed over the target. Readers see either the previous file or the
//! complete new one.

use crate::error::{Result, ScaffoldError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replace `path` with `content`.
///
/// The directory holding `path` must already exist. On failure the temporary
/// file is removed and any previous `path` is left untouched.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    let written = write_synced(&temp_path, content).and_then(|()| fs::rename(&temp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(ScaffoldError::UserError(format!(
            "failed to write '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let name = target.file_name().ok_or_else(|| {
        ScaffoldError::UserError(format!("'{}' does not name a file", target.display()))
    })?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(name);
    temp_name.push(".tmp");
    Ok(target.with_file_name(temp_name))
}

fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
