//! Generation input and the context passed through pipeline phases.

use resmap_core::{DEFAULT_EXTENSION, RootContext};
use resmap_ir::AssetModule;

use super::diagnostic::Diagnostic;
use crate::assets::CollectedAssets;

/// Everything a generation run depends on.
///
/// The pipeline never reads the environment; the caller supplies the
/// candidate list and configuration values explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInput {
    /// Candidate file paths, in discovery order.
    pub candidates: Vec<String>,
    /// The configured project directory. Its last segment names the root folder.
    pub project_dir: Option<String>,
    /// Namespace or module name for the generated code.
    pub namespace: String,
    /// Recognized asset-description extension, without the dot.
    pub extension: String,
}

impl GenerationInput {
    pub fn new(candidates: Vec<String>, namespace: impl Into<String>) -> Self {
        Self {
            candidates,
            project_dir: None,
            namespace: namespace.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_project_dir(mut self, dir: impl Into<String>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

/// Context passed through all pipeline phases.
///
/// Each built-in phase fills in one field; diagnostics accumulate along the way.
#[derive(Debug)]
pub struct CompilationContext {
    pub input: GenerationInput,
    /// The resolved root folder (populated by ResolvePhase).
    pub root: Option<RootContext>,
    /// Classified candidates (populated by CollectPhase).
    pub collected: Option<CollectedAssets>,
    /// One module per category, in [`resmap_ir::Category::ALL`] order
    /// (populated by DerivePhase).
    pub modules: Vec<AssetModule>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(input: GenerationInput) -> Self {
        Self {
            input,
            root: None,
            collected: None,
            modules: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
    }

    /// Take the derived modules out of the context.
    pub fn take_modules(&mut self) -> Vec<AssetModule> {
        std::mem::take(&mut self.modules)
    }
}
