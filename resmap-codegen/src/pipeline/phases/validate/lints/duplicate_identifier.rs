//! Lint for identifier collision detection.

use indexmap::{IndexMap, IndexSet};
use resmap_ir::{AssetEntry, AssetModule};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when two entries of a module share an identifier.
///
/// Every offending relative path is named. A path listed twice is reported
/// separately, since the fix is on the input side rather than a rename.
pub struct DuplicateIdentifierLint;

impl Lint for DuplicateIdentifierLint {
    fn name(&self) -> &'static str {
        "duplicate-identifier"
    }

    fn description(&self) -> &'static str {
        "Detect assets that normalize to the same identifier"
    }

    fn check(&self, modules: &[AssetModule], diagnostics: &mut Vec<Diagnostic>) {
        for module in modules {
            let mut by_identifier: IndexMap<&str, Vec<&AssetEntry>> = IndexMap::new();
            for entry in &module.entries {
                by_identifier
                    .entry(entry.identifier.as_str())
                    .or_default()
                    .push(entry);
            }

            for (identifier, entries) in by_identifier {
                if entries.len() < 2 {
                    continue;
                }

                let paths: IndexSet<&str> =
                    entries.iter().map(|e| e.relative_path.as_str()).collect();

                let message = if paths.len() == 1 {
                    format!(
                        "{} '{}' is listed more than once ({} times)",
                        module.category,
                        paths[0],
                        entries.len()
                    )
                } else {
                    let quoted: Vec<String> = paths.iter().map(|p| format!("'{}'", p)).collect();
                    format!(
                        "{} identifier '{}' is derived from more than one asset: {}",
                        module.category,
                        identifier,
                        quoted.join(", ")
                    )
                };

                diagnostics.push(
                    Diagnostic::error("validate", message)
                        .at(format!("{}::{}", module.category.type_name(), identifier)),
                );
            }
        }
    }
}
