//! Lint noting categories without any assets.

use resmap_ir::AssetModule;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that reports empty categories.
///
/// An empty module is still generated, so this is informational only.
pub struct EmptyCategoryLint;

impl Lint for EmptyCategoryLint {
    fn name(&self) -> &'static str {
        "empty-category"
    }

    fn description(&self) -> &'static str {
        "Note categories with no discovered assets"
    }

    fn check(&self, modules: &[AssetModule], diagnostics: &mut Vec<Diagnostic>) {
        for module in modules.iter().filter(|m| m.is_empty()) {
            diagnostics.push(
                Diagnostic::info(
                    "validate",
                    format!(
                        "no {} assets found, an empty {} module will be generated",
                        module.category,
                        module.category.type_name()
                    ),
                )
                .at(module.category.folder()),
            );
        }
    }
}
