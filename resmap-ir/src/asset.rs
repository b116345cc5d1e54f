//! Discovered assets at each stage of the pipeline.

use serde::Serialize;

use crate::Category;

/// A candidate file that passed the extension filter and was placed in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedAsset {
    /// Category decided from the folders in the path.
    pub category: Category,
    /// The path exactly as the host build supplied it.
    pub source_path: String,
}

impl ClassifiedAsset {
    pub fn new(category: Category, source_path: impl Into<String>) -> Self {
        Self {
            category,
            source_path: source_path.into(),
        }
    }
}

/// A classified asset with its derived identifier and resource path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    /// PascalCase identifier, unique within its module.
    pub identifier: String,
    /// Path relative to the project root, `/` separated, extension kept.
    pub relative_path: String,
    /// URI handed to the engine's resource loader (e.g. `res://Scenes/main.tscn`).
    pub resource_path: String,
    /// The path exactly as the host build supplied it.
    pub source_path: String,
}

/// All entries of one category, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetModule {
    pub category: Category,
    pub entries: Vec<AssetEntry>,
}

impl AssetModule {
    /// Create an empty module for a category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            entries: Vec::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no asset was discovered for this category.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(identifier: &str, relative_path: &str) -> AssetEntry {
        AssetEntry {
            identifier: identifier.to_string(),
            relative_path: relative_path.to_string(),
            resource_path: format!("res://{}", relative_path),
            source_path: format!("/game/{}", relative_path),
        }
    }

    #[test]
    fn test_empty_module() {
        let module = AssetModule::new(Category::Scene);
        assert!(module.is_empty());
        assert_eq!(module.len(), 0);
    }

    #[test]
    fn test_module_serializes_entries_in_order() {
        let mut module = AssetModule::new(Category::Prefab);
        module.entries.push(entry("Goblin", "Prefabs/goblin.tscn"));
        module.entries.push(entry("Orc", "Prefabs/orc.tscn"));

        assert_eq!(module.len(), 2);
        let json = serde_json::to_value(&module).unwrap();
        assert_eq!(json["entries"][1]["identifier"], "Orc");
        assert_eq!(json["entries"][1]["resource_path"], "res://Prefabs/orc.tscn");
    }
}
