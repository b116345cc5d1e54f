use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, leaving it untouched when the content is unchanged
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_if_changed(&self.path(base), &self.render())
    }
}

/// Write `content` unless the file already holds exactly that content.
///
/// Skipping identical writes keeps file modification times stable, so the
/// host build does not recompile the generated modules on every run.
fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(WriteResult::Unchanged);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(WriteResult::Written)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// A generated file with its final path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file
    pub fn write(&self) -> Result<WriteResult> {
        write_if_changed(&self.path, &self.content)
    }
}
