//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to emit the asset modules in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust", "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rs", "cs")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were (re)written, relative to the output directory
    pub written: Vec<String>,
    /// Files whose content was already up to date
    pub unchanged: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
