//! Candidate file discovery.
//!
//! Walks the project directory and returns every file with the recognized
//! extension, in a stable order so repeated runs feed the pipeline the same
//! input.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use resmap_core::has_extension;

/// Find candidate files under `root`.
///
/// Hidden directories (such as `.godot`) and the `exclude`d directories are
/// skipped. Entries are visited in file name order.
pub fn candidates(root: &Path, extension: &str, exclude: &[&Path]) -> Result<Vec<String>> {
    let exclude: Vec<PathBuf> = exclude
        .iter()
        .filter_map(|dir| dir.canonicalize().ok())
        .collect();

    let mut found = Vec::new();
    scan(root, extension, &exclude, &mut found)?;
    Ok(found)
}

fn scan(dir: &Path, extension: &str, exclude: &[PathBuf], found: &mut Vec<String>) -> Result<()> {
    let mut entries = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read '{}'", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .wrap_err_with(|| format!("failed to read '{}'", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_name = entry.file_name();
        if file_name.to_string_lossy().starts_with('.') {
            continue;
        }

        if path.is_dir() {
            if exclude.contains(&path) {
                log::debug!("skipping output directory '{}'", path.display());
                continue;
            }
            scan(&path, extension, exclude, found)?;
        } else {
            let path = path.to_string_lossy();
            if has_extension(&path, extension) {
                found.push(path.into_owned());
            }
        }
    }

    Ok(())
}
