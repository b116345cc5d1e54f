//! Lint trait for asset module validation.

use resmap_ir::AssetModule;

use crate::pipeline::Diagnostic;

/// A lint that checks the derived modules for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the modules and add any diagnostics.
    fn check(&self, modules: &[AssetModule], diagnostics: &mut Vec<Diagnostic>);
}
