//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the generation pipeline.
///
/// Built-in phases run in the order `resolve`, `collect`, `derive`,
/// `validate`. Custom phases added with [`Pipeline::phase`] run afterwards
/// and see the finished modules.
///
/// [`Pipeline::phase`]: super::Pipeline::phase
pub trait Phase: Send + Sync {
    /// Short name, shown in diagnostics and passed to plugin hooks.
    fn name(&self) -> &'static str;

    /// One-line summary, logged at trace level.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// Problems are recorded as diagnostics on `ctx`; returning an error
    /// stops the pipeline.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
