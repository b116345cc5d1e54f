//! Pipeline orchestrator.

use eyre::Result;

use super::{
    CompilationContext, GenerationInput, Phase, Plugin,
    phases::{CollectPhase, DerivePhase, ResolvePhase, ValidatePhase},
};

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (resolve, collect, derive, validate) followed by
/// any user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(LogPlugin)
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(input)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the default built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a generation input.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. The whole run fails; no
    /// partial set of modules is ever returned.
    pub fn run(&self, input: GenerationInput) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(input);
        self.run_on(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Unlike [`Pipeline::run`], the context survives a failed phase, so the
    /// caller can still report every diagnostic recorded up to that point.
    pub fn run_on(&self, ctx: &mut CompilationContext) -> Result<()> {
        let validate = ValidatePhase::new();
        let builtin_phases: [&dyn Phase; 4] =
            [&ResolvePhase, &CollectPhase, &DerivePhase, &validate];

        for phase in builtin_phases {
            self.run_phase(phase, ctx)?;
        }
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), ctx)?;
        }

        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        log::trace!("phase '{}': {}", phase_name, phase.description());

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
