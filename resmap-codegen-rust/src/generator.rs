use std::path::Path;

use eyre::Result;
use resmap_codegen::{GenerateResult, LanguageCodegen, PreviewFile, pipeline::CompilationContext};
use resmap_core::{GeneratedFile, WriteResult};
use resmap_ir::AssetModule;

use crate::files::{AssetModuleRs, ModRs};

/// Rust code generator producing one enum module per asset category.
pub struct Generator {
    modules: Vec<AssetModule>,
    namespace: String,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: relative_path(file.as_ref()),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = relative_path(file.as_ref());
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Unchanged => result.unchanged.push(path),
            }
        }

        Ok(result)
    }
}

impl Generator {
    pub fn new(modules: Vec<AssetModule>, namespace: impl Into<String>) -> Self {
        Self {
            modules,
            namespace: namespace.into(),
        }
    }

    /// Create a generator from a finished pipeline run.
    pub fn from_context(mut ctx: CompilationContext) -> Self {
        let modules = ctx.take_modules();
        Self::new(modules, ctx.input.namespace)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = Vec::new();
        for module in &self.modules {
            files.push(Box::new(AssetModuleRs::new(module, &self.namespace)));
        }
        files.push(Box::new(ModRs::new(
            self.modules.iter().map(|m| m.category),
            &self.namespace,
        )));
        files
    }
}

/// Path of a generated file relative to the output directory.
fn relative_path(file: &dyn GeneratedFile) -> String {
    file.path(Path::new("")).display().to_string()
}

#[cfg(test)]
mod tests {
    use resmap_ir::Category;
    use tempfile::TempDir;

    use super::*;

    fn empty_generator() -> Generator {
        Generator::new(
            Category::ALL.into_iter().map(AssetModule::new).collect(),
            "game",
        )
    }

    #[test]
    fn test_preview_lists_files() {
        let paths: Vec<String> = empty_generator()
            .preview()
            .into_iter()
            .map(|f| f.path)
            .collect();
        assert_eq!(paths, ["prefabs.rs", "scenes.rs", "mod.rs"]);
    }

    #[test]
    fn test_generate_skips_unchanged() {
        let temp = TempDir::new().unwrap();
        let generator = empty_generator();

        let first = generator.generate(temp.path()).unwrap();
        assert_eq!(first.written.len(), 3);
        assert!(first.unchanged.is_empty());

        let second = generator.generate(temp.path()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 3);
        assert!(temp.path().join("prefabs.rs").exists());
    }
}
