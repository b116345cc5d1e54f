//! List operation - derive every identifier without generating code.

use eyre::Result;

use super::run_pipeline;
use crate::{project::Project, reports::ListReport};

pub fn list(project: &Project) -> Result<ListReport> {
    let mut ctx = run_pipeline(project)?;

    Ok(ListReport {
        modules: ctx.take_modules(),
    })
}
