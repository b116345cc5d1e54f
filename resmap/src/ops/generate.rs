//! Generate operation - scan the project and emit the asset modules.

use eyre::{Context, Result};

use super::{category_counts, run_pipeline};
use crate::{
    language::LanguageSupport,
    project::Project,
    reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Nothing is written unless the whole pipeline succeeds.
pub fn generate(project: &Project, opts: GenerateOptions) -> Result<GenerateReport> {
    let ctx = run_pipeline(project)?;

    let warnings = ctx.warnings().map(|d| d.message.clone()).collect();
    let counts = category_counts(&ctx);

    let generator = LanguageSupport::get(project.language).generator(ctx);
    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| (f.path, f.content))
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(&project.output_dir)
            .wrap_err("Failed to generate code")?;
        log::info!(
            "{} file(s) written, {} unchanged",
            generated.written.len(),
            generated.unchanged.len()
        );

        GenerationResult::Written(WrittenResult {
            output_dir: project.output_dir.clone(),
            written: generated.written,
            unchanged: generated.unchanged,
        })
    };

    Ok(GenerateReport {
        namespace: project.namespace.clone(),
        language: project.language,
        warnings,
        counts,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use resmap_manifest::Language;
    use tempfile::TempDir;

    use super::*;

    fn make_project(temp: &TempDir, language: Language) -> Project {
        let dir = temp.path().join("game");
        for relative in [
            "Prefabs/Enemies/goblin_warrior.tscn",
            "Scenes/main_menu.tscn",
            "Scenes/main_menu.gd",
        ] {
            let path = dir.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let dir = dir.canonicalize().unwrap();

        Project {
            output_dir: dir.join(language.default_output_dir()),
            dir,
            namespace: "game".to_string(),
            extension: "tscn".to_string(),
            language,
        }
    }

    fn read(dir: &Path, file: &str) -> String {
        fs::read_to_string(dir.join(file)).unwrap()
    }

    #[test]
    fn test_generate_rust_writes_modules() {
        let temp = TempDir::new().unwrap();
        let project = make_project(&temp, Language::Rust);

        let report = generate(&project, GenerateOptions { dry_run: false }).unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.written.len(), 3);
        let prefabs = read(&project.output_dir, "prefabs.rs");
        assert!(prefabs.contains(
            r#"Self::EnemiesGoblinWarrior => "res://Prefabs/Enemies/goblin_warrior.tscn","#
        ));
        assert!(read(&project.output_dir, "scenes.rs").contains("MainMenu,"));
        assert!(read(&project.output_dir, "mod.rs").contains("pub use scenes::Scene;"));
    }

    #[test]
    fn test_generate_skips_unchanged_files() {
        let temp = TempDir::new().unwrap();
        let project = make_project(&temp, Language::CSharp);

        generate(&project, GenerateOptions { dry_run: false }).unwrap();
        let report = generate(&project, GenerateOptions { dry_run: false }).unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert!(written.written.is_empty());
        assert_eq!(written.unchanged, ["Prefabs.g.cs", "Scenes.g.cs"]);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let project = make_project(&temp, Language::Rust);

        let report = generate(&project, GenerateOptions { dry_run: true }).unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview result");
        };
        assert_eq!(preview.files.len(), 3);
        assert!(!project.output_dir.exists());
    }

    #[test]
    fn test_collision_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let project = make_project(&temp, Language::Rust);
        fs::create_dir_all(project.dir.join("Prefabs/Enemies-Goblin")).unwrap();
        fs::write(project.dir.join("Prefabs/Enemies-Goblin/warrior.tscn"), "").unwrap();

        let err = generate(&project, GenerateOptions { dry_run: false }).unwrap_err();

        let message = format!("{:?}", err);
        assert!(message.contains("Enemies-Goblin/warrior.tscn"));
        assert!(message.contains("Enemies/goblin_warrior.tscn"));
        assert!(!project.output_dir.exists());
    }
}
