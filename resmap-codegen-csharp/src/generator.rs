use std::path::Path;

use eyre::Result;
use resmap_codegen::{GenerateResult, LanguageCodegen, PreviewFile, pipeline::CompilationContext};
use resmap_core::{GeneratedFile, WriteResult};
use resmap_ir::{AssetModule, Category};

use crate::files::AssetModuleCs;

/// C# code generator producing one `.g.cs` file per asset category.
pub struct Generator {
    modules: Vec<AssetModule>,
    namespace: String,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .map(|(category, file)| PreviewFile {
                path: AssetModuleCs::file_name(category),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for (category, file) in self.files() {
            let path = AssetModuleCs::file_name(category);
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

    fn files(&self) -> impl Iterator<Item = (Category, AssetModuleCs<'_>)> {
        self.modules
            .iter()
            .map(|module| (module.category, AssetModuleCs::new(module, &self.namespace)))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn empty_generator() -> Generator {
        Generator::new(
            Category::ALL.into_iter().map(AssetModule::new).collect(),
            "Game",
        )
    }

    #[test]
    fn test_preview_lists_files() {
        let paths: Vec<String> = empty_generator()
            .preview()
            .into_iter()
            .map(|f| f.path)
            .collect();
        assert_eq!(paths, ["Prefabs.g.cs", "Scenes.g.cs"]);
    }

    #[test]
    fn test_generate_writes_once() {
        let temp = TempDir::new().unwrap();
        let generator = empty_generator();

        let first = generator.generate(temp.path()).unwrap();
        assert_eq!(first.written, ["Prefabs.g.cs", "Scenes.g.cs"]);

        let second = generator.generate(temp.path()).unwrap();
        assert_eq!(second.unchanged.len(), 2);
        assert!(second.written.is_empty());
    }
}
