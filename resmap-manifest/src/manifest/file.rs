use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a resmap.toml file with both its location and parsed manifest.
#[derive(Debug)]
pub struct ResmapToml {
    path: PathBuf,
    manifest: Manifest,
}

impl ResmapToml {
    /// Open and parse a resmap.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let manifest = Manifest::from_file(&path)?;

        Ok(Self { path, manifest })
    }

    /// Open a resmap.toml, or fall back to default settings when it does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                manifest: Manifest::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the manifest's relative paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_or_default_missing_file() {
        let temp = TempDir::new().unwrap();
        let toml = ResmapToml::open_or_default(temp.path().join("resmap.toml")).unwrap();
        assert_eq!(toml.manifest().extension(), "tscn");
        assert_eq!(toml.base_dir(), temp.path());
    }

    #[test]
    fn test_open_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("resmap.toml");
        std::fs::write(&path, "[project]\nnamespace = \"Game\"\n").unwrap();

        let toml = ResmapToml::open(&path).unwrap();
        assert_eq!(toml.path(), path);
        assert_eq!(toml.manifest().namespace(), Some("Game"));
    }

    #[test]
    fn test_base_dir_of_bare_filename() {
        let toml = ResmapToml::open_or_default("resmap-does-not-exist.toml").unwrap();
        assert_eq!(toml.base_dir(), Path::new("."));
    }
}
