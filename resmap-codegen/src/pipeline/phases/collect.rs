//! Collect phase - filters and classifies candidate files.

use eyre::{Result, eyre};

use crate::{
    assets::collect,
    pipeline::{CompilationContext, Phase},
};

/// Phase that keeps candidates with the recognized extension and sorts them
/// into prefabs and scenes.
pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn description(&self) -> &'static str {
        "Filter candidate files and classify them by category folder"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let root = ctx
            .root
            .as_ref()
            .ok_or_else(|| eyre!("root folder not resolved - did ResolvePhase run?"))?;

        let collected = collect(
            ctx.input.candidates.iter().map(String::as_str),
            &ctx.input.extension,
            root,
        );

        log::info!(
            "collected {} prefab(s) and {} scene(s) from {} candidate(s)",
            collected.prefabs.len(),
            collected.scenes.len(),
            ctx.input.candidates.len()
        );

        ctx.collected = Some(collected);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use resmap_core::RootContext;

    use super::*;
    use crate::pipeline::GenerationInput;

    #[test]
    fn test_requires_resolved_root() {
        let mut ctx = CompilationContext::new(GenerationInput::new(Vec::new(), "game"));
        assert!(CollectPhase.run(&mut ctx).is_err());
    }

    #[test]
    fn test_collects_with_configured_extension() {
        let input = GenerationInput::new(
            vec![
                "game/Scenes/main.scn".to_string(),
                "game/Scenes/menu.tscn".to_string(),
            ],
            "game",
        )
        .with_extension("scn");
        let mut ctx = CompilationContext::new(input);
        ctx.root = Some(RootContext::new("game"));

        CollectPhase.run(&mut ctx).unwrap();

        let collected = ctx.collected.unwrap();
        assert_eq!(collected.scenes.len(), 1);
        assert_eq!(collected.scenes[0].source_path, "game/Scenes/main.scn");
    }
}
