//! List command report.

use resmap_ir::AssetModule;
use serde::Serialize;

use super::output::{Output, Report};

/// Every derived identifier, grouped by category.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub modules: Vec<AssetModule>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, module) in self.modules.iter().enumerate() {
            if i > 0 {
                out.newline();
            }

            out.section(&format!("{} ({})", module.category.type_name(), module.len()));
            if module.is_empty() {
                out.list_item("none");
            }
            for entry in &module.entries {
                out.key_value_indented(&entry.identifier, &entry.resource_path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use resmap_ir::{AssetEntry, Category};

    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render() {
        let mut prefabs = AssetModule::new(Category::Prefab);
        prefabs.entries.push(AssetEntry {
            identifier: "EnemiesGoblinWarrior".to_string(),
            relative_path: "Prefabs/Enemies/goblin_warrior.tscn".to_string(),
            resource_path: "res://Prefabs/Enemies/goblin_warrior.tscn".to_string(),
            source_path: "/dev/game/Prefabs/Enemies/goblin_warrior.tscn".to_string(),
        });
        let report = ListReport {
            modules: vec![prefabs, AssetModule::new(Category::Scene)],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Prefab (1):",
                "  EnemiesGoblinWarrior: res://Prefabs/Enemies/goblin_warrior.tscn",
                "",
                "Scene (0):",
                "  - none",
            ]
        );
    }
}
