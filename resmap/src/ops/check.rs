//! Check operation - run the pipeline and collect diagnostics.

use eyre::Result;
use resmap_codegen::pipeline::CompilationContext;

use super::{category_counts, pipeline};
use crate::{project::Project, reports::CheckReport};

/// Execute the check operation.
///
/// A failing pipeline is not an error here: its diagnostics are the report.
pub fn check(project: &Project) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(project.generation_input()?);

    let failure = match pipeline().run_on(&mut ctx) {
        Err(err) if !ctx.has_errors() => Some(format!("{:#}", err)),
        _ => None,
    };

    Ok(CheckReport {
        project_dir: project.dir.clone(),
        counts: category_counts(&ctx),
        diagnostics: ctx.diagnostics,
        failure,
    })
}
