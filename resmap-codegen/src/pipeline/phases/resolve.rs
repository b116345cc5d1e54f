//! Resolve phase - determines the project root folder.

use eyre::Result;
use resmap_core::RootContext;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that resolves the root folder name from the configured project directory.
///
/// A missing directory is reported as a warning only. Any asset that reaches
/// the derive phase afterwards fails there, naming its path.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve the project root folder"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let root = RootContext::resolve(ctx.input.project_dir.as_deref());
        if root.is_empty() {
            ctx.add_warning(
                self.name(),
                "project directory is not configured, resource paths cannot be resolved",
            );
        }
        ctx.root = Some(root);
        Ok(())
    }
}
