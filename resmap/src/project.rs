//! Project settings resolved from resmap.toml and command-line flags.

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, WrapErr, bail};
use resmap_codegen::pipeline::GenerationInput;
use resmap_manifest::{Language, ResmapToml, validate_namespace};

use crate::{commands::UnwrapOrExit, discover, language::LanguageSupport};

/// Flags shared by every command that scans a project.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to resmap.toml (used only if it exists)
    #[arg(short, long, default_value = "resmap.toml")]
    pub config: PathBuf,

    /// Project directory (overrides resmap.toml)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Namespace or module name of the generated code (overrides resmap.toml)
    #[arg(short, long)]
    pub namespace: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug)]
pub struct Project {
    /// Canonical project directory.
    pub dir: PathBuf,
    pub namespace: String,
    pub extension: String,
    pub language: Language,
    /// Where generated files go.
    pub output_dir: PathBuf,
}

impl ProjectArgs {
    /// Load resmap.toml and apply the flag overrides.
    ///
    /// `output` is taken relative to the working directory; the configured
    /// output directory is relative to the project directory.
    pub fn resolve(&self, language: Option<Language>, output: Option<&Path>) -> Result<Project> {
        let resmap_toml = ResmapToml::open_or_default(&self.config).unwrap_or_exit();
        let manifest = resmap_toml.manifest();

        let dir = match &self.project {
            Some(dir) => dir.clone(),
            None => resmap_toml.base_dir().join(&manifest.project.dir),
        };
        let dir = dir
            .canonicalize()
            .wrap_err_with(|| format!("project directory '{}' not found", dir.display()))?;

        let language = language.unwrap_or(manifest.output.language);
        let output_dir = match output {
            Some(output) => output.to_path_buf(),
            None => dir.join(manifest.output_dir(language)),
        };

        let namespace = match (&self.namespace, manifest.namespace()) {
            (Some(flag), _) => {
                if let Some(reason) = validate_namespace(flag) {
                    bail!("invalid namespace '{}': {}", flag, reason);
                }
                flag.clone()
            }
            (None, Some(configured)) => configured.to_string(),
            (None, None) => LanguageSupport::get(language).default_namespace(&dir),
        };

        Ok(Project {
            dir,
            namespace,
            extension: manifest.extension().to_string(),
            language,
            output_dir,
        })
    }
}

impl Project {
    /// Discover candidate files and build the pipeline input.
    pub fn generation_input(&self) -> Result<GenerationInput> {
        let candidates =
            discover::candidates(&self.dir, &self.extension, &[self.output_dir.as_path()])?;
        log::info!(
            "found {} candidate file(s) under '{}'",
            candidates.len(),
            self.dir.display()
        );

        Ok(GenerationInput::new(candidates, &self.namespace)
            .with_project_dir(self.dir.to_string_lossy())
            .with_extension(&self.extension))
    }
}
