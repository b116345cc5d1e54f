//! Unified language dispatch.
//!
//! Centralizes language-specific generator creation and defaults.

use std::path::Path;

use resmap_codegen::{LanguageCodegen, pipeline::CompilationContext};
use resmap_codegen_csharp::Generator as CSharpGenerator;
use resmap_codegen_rust::Generator as RustGenerator;
use resmap_core::{to_pascal_case, to_snake_case};
use resmap_manifest::Language;

/// Namespace used when the project folder name has nothing usable in it.
const FALLBACK_NAMESPACE: &str = "assets";

/// Language-specific support for code generation.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        Self { language }
    }

    /// Create a generator for this language.
    pub fn generator(&self, ctx: CompilationContext) -> Box<dyn LanguageCodegen> {
        match self.language {
            Language::Rust => Box::new(RustGenerator::from_context(ctx)),
            Language::CSharp => Box::new(CSharpGenerator::from_context(ctx)),
        }
    }

    /// Namespace derived from the project folder name.
    ///
    /// `my-game` becomes `my_game` for Rust and `MyGame` for C#.
    pub fn default_namespace(&self, project_dir: &Path) -> String {
        let folder: String = project_dir
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        let pascal = to_pascal_case(&folder);
        let name = match self.language {
            Language::Rust => to_snake_case(&pascal),
            Language::CSharp => pascal,
        };

        if name.is_empty() {
            FALLBACK_NAMESPACE.to_string()
        } else if name.starts_with(|c: char| c.is_ascii_digit()) {
            format!("_{}", name)
        } else {
            name
        }
    }
}
