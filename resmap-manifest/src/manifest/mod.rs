//! Manifest types and parsing for resmap.toml files.

mod file;
mod language;
mod parse;

use std::path::{Path, PathBuf};

pub use file::ResmapToml;
pub use language::Language;
use resmap_core::DEFAULT_EXTENSION;
use serde::Deserialize;
use toml::Spanned;

/// Root manifest for resmap.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where the game project lives and how it is named
    #[serde(default)]
    pub project: ProjectConfig,

    /// What to generate and where
    #[serde(default)]
    pub output: OutputConfig,
}

/// The `[project]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project root directory, relative to the manifest
    #[serde(default = "default_project_dir")]
    pub dir: PathBuf,

    /// Namespace (C#) or module name (Rust) of the generated code
    #[serde(default)]
    pub namespace: Option<Spanned<String>>,

    /// Extension of scene description files, without the dot
    #[serde(default)]
    pub extension: Option<Spanned<String>>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            dir: default_project_dir(),
            namespace: None,
            extension: None,
        }
    }
}

fn default_project_dir() -> PathBuf {
    PathBuf::from(".")
}

/// The `[output]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Target language
    #[serde(default)]
    pub language: Language,

    /// Output directory, relative to the project directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Manifest {
    /// Configured namespace, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.project.namespace.as_ref().map(|n| n.get_ref().as_str())
    }

    /// The recognized scene file extension.
    pub fn extension(&self) -> &str {
        self.project
            .extension
            .as_ref()
            .map_or(DEFAULT_EXTENSION, |e| e.get_ref().as_str())
    }

    /// Output directory for `language`, relative to the project directory.
    pub fn output_dir(&self, language: Language) -> &Path {
        self.output
            .dir
            .as_deref()
            .unwrap_or_else(|| Path::new(language.default_output_dir()))
    }
}
