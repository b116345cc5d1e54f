//! Derive phase - builds one asset module per category.

use eyre::{Result, bail, eyre};
use resmap_core::RootContext;
use resmap_ir::{AssetModule, Category};

use crate::{
    assets::{CollectedAssets, derive_entry},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that derives the relative path, identifier and resource path of
/// every collected asset.
///
/// Any asset that cannot be derived fails the whole run; a module is never
/// emitted with entries missing.
pub struct DerivePhase;

impl Phase for DerivePhase {
    fn name(&self) -> &'static str {
        "derive"
    }

    fn description(&self) -> &'static str {
        "Derive identifiers and resource paths"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let root = ctx
            .root
            .as_ref()
            .ok_or_else(|| eyre!("root folder not resolved - did ResolvePhase run?"))?;
        let collected = ctx
            .collected
            .as_ref()
            .ok_or_else(|| eyre!("assets not collected - did CollectPhase run?"))?;

        let (modules, diagnostics) = derive_modules(self.name(), root, collected);
        let failed = diagnostics.len();
        ctx.diagnostics.extend(diagnostics);

        if failed > 0 {
            bail!("failed to derive {} asset path(s)", failed);
        }

        ctx.modules = modules;
        Ok(())
    }
}

fn derive_modules(
    phase: &str,
    root: &RootContext,
    collected: &CollectedAssets,
) -> (Vec<AssetModule>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let modules = Category::ALL
        .into_iter()
        .map(|category| {
            let mut module = AssetModule::new(category);
            for asset in collected.get(category) {
                match derive_entry(asset, root) {
                    Ok(entry) => module.entries.push(entry),
                    Err(err) => {
                        let location = err.path().to_string();
                        diagnostics.push(Diagnostic::error(phase, err.to_string()).at(location));
                    }
                }
            }
            module
        })
        .collect();

    (modules, diagnostics)
}

#[cfg(test)]
mod tests {
    use resmap_ir::ClassifiedAsset;

    use super::*;
    use crate::pipeline::GenerationInput;

    fn context_with(root: RootContext, assets: Vec<ClassifiedAsset>) -> CompilationContext {
        let mut ctx = CompilationContext::new(GenerationInput::new(Vec::new(), "game"));
        let mut collected = CollectedAssets::default();
        for asset in assets {
            match asset.category {
                Category::Prefab => collected.prefabs.push(asset),
                Category::Scene => collected.scenes.push(asset),
            }
        }
        ctx.root = Some(root);
        ctx.collected = Some(collected);
        ctx
    }

    #[test]
    fn test_builds_module_per_category() {
        let mut ctx = context_with(
            RootContext::new("game"),
            vec![ClassifiedAsset::new(Category::Scene, "game/Scenes/main_menu.tscn")],
        );

        DerivePhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.modules.len(), 2);
        assert_eq!(ctx.modules[0].category, Category::Prefab);
        assert!(ctx.modules[0].is_empty());
        assert_eq!(ctx.modules[1].entries[0].identifier, "MainMenu");
        assert_eq!(
            ctx.modules[1].entries[0].resource_path,
            "res://Scenes/main_menu.tscn"
        );
    }

    #[test]
    fn test_path_outside_root_fails() {
        let mut ctx = context_with(
            RootContext::new("game"),
            vec![
                ClassifiedAsset::new(Category::Scene, "game/Scenes/ok.tscn"),
                ClassifiedAsset::new(Category::Scene, "/tmp/elsewhere/Scenes/stray.tscn"),
            ],
        );

        let result = DerivePhase.run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.modules.is_empty());
        let error = ctx.errors().next().unwrap();
        assert!(error.message.contains("/tmp/elsewhere/Scenes/stray.tscn"));
        assert_eq!(error.location.as_deref(), Some("/tmp/elsewhere/Scenes/stray.tscn"));
    }

    #[test]
    fn test_unresolved_root_fails_for_real_assets() {
        let mut ctx = context_with(
            RootContext::default(),
            vec![ClassifiedAsset::new(Category::Prefab, "game/Prefabs/a.tscn")],
        );
        assert!(DerivePhase.run(&mut ctx).is_err());
        assert_eq!(ctx.error_count(), 1);
    }

    #[test]
    fn test_unresolved_root_without_assets_succeeds() {
        let mut ctx = context_with(RootContext::default(), Vec::new());
        DerivePhase.run(&mut ctx).unwrap();
        assert_eq!(ctx.modules.len(), 2);
    }
}
