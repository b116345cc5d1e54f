//! Core operations.
//!
//! This module contains the business logic for resmap commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use list::list;
use eyre::Result;
use resmap_codegen::pipeline::{CompilationContext, LogPlugin, Pipeline};
use resmap_ir::Category;

use crate::{project::Project, reports::CategoryCount};

/// The pipeline every command runs.
fn pipeline() -> Pipeline {
    Pipeline::new().plugin(LogPlugin)
}

/// Scan the project and run the pipeline to completion.
///
/// A failed run is turned into an error listing every error diagnostic,
/// so the offending paths reach the user.
fn run_pipeline(project: &Project) -> Result<CompilationContext> {
    let mut ctx = CompilationContext::new(project.generation_input()?);

    if let Err(err) = pipeline().run_on(&mut ctx) {
        let errors: Vec<String> = ctx.errors().map(ToString::to_string).collect();
        if errors.is_empty() {
            return Err(err.wrap_err("pipeline failed"));
        }
        return Err(err.wrap_err(format!("pipeline failed:\n{}", errors.join("\n"))));
    }

    Ok(ctx)
}

/// Number of classified assets per category.
fn category_counts(ctx: &CompilationContext) -> Vec<CategoryCount> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: ctx
                .collected
                .as_ref()
                .map_or(0, |collected| collected.get(category).len()),
        })
        .collect()
}
