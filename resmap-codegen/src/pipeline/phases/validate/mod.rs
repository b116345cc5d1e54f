//! Validate phase - runs lints on the derived modules.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{DuplicateIdentifierLint, EmptyCategoryLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the derived modules with the built-in lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![Box::new(DuplicateIdentifierLint), Box::new(EmptyCategoryLint)],
        }
    }

}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check derived modules and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            log::trace!("lint '{}': {}", lint.name(), lint.description());
            lint.check(&ctx.modules, &mut ctx.diagnostics);
        }

        // Warnings and infos are allowed
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
