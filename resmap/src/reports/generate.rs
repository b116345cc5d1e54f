//! Generate command report data structures.

use std::path::PathBuf;

use resmap_manifest::Language;

use super::{
    CategoryCount,
    output::{Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub namespace: String,
    pub language: Language,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Number of entries per generated module.
    pub counts: Vec<CategoryCount>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files left untouched because their content was already current.
    pub unchanged: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// (path, content) of each file that would be generated.
    pub files: Vec<(String, String)>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Namespace", &format!("{} ({})", self.namespace, self.language));
        out.section("Assets");
        for count in &self.counts {
            out.key_value_indented(count.category.folder(), &count.count.to_string());
        }
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for file in &written.written {
            out.added_item(file);
        }
        if !written.unchanged.is_empty() {
            out.preformatted(&format!("  {} file(s) unchanged", written.unchanged.len()));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for (path, content) in &preview.files {
            out.divider(path);
            out.preformatted(content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
