//! Check command report data structures.

use std::path::PathBuf;

use resmap_codegen::pipeline::{Diagnostic, Severity};
use resmap_ir::Category;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from a project scan.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Canonical project directory.
    pub project_dir: PathBuf,
    /// Number of classified assets per category.
    pub counts: Vec<CategoryCount>,
    /// Every diagnostic recorded before the pipeline finished or stopped.
    pub diagnostics: Vec<Diagnostic>,
    /// Why the pipeline stopped, when no error diagnostic explains it.
    pub failure: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.failure.is_none() && !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let mut text = format!("{}: {}", diag.severity, diag.message);
            if let Some(loc) = &diag.location {
                text.push_str(&format!("\n  --> {}", loc));
            }

            match diag.severity {
                Severity::Error | Severity::Warning => out.warning(&text),
                Severity::Info => out.preformatted(&text),
            }
        }

        if let Some(failure) = &self.failure {
            out.warning(&format!("error: {}", failure));
        }

        if !self.diagnostics.is_empty() || self.failure.is_some() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.project_dir.display()));
            for count in &self.counts {
                out.key_value_indented(count.category.folder(), &count.count.to_string());
            }
        }
    }
}
