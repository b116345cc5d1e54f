//! Collector: extension filtering and category classification.

use resmap_core::{RootContext, has_extension, normalize_separators, segments};
use resmap_ir::{Category, ClassifiedAsset};

/// Classified candidates, one ordered sequence per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedAssets {
    pub prefabs: Vec<ClassifiedAsset>,
    pub scenes: Vec<ClassifiedAsset>,
}

impl CollectedAssets {
    /// Assets of the given category, in discovery order.
    pub fn get(&self, category: Category) -> &[ClassifiedAsset] {
        match category {
            Category::Prefab => &self.prefabs,
            Category::Scene => &self.scenes,
        }
    }

    /// Total number of classified assets.
    pub fn len(&self) -> usize {
        self.prefabs.len() + self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, asset: ClassifiedAsset) {
        match asset.category {
            Category::Prefab => self.prefabs.push(asset),
            Category::Scene => self.scenes.push(asset),
        }
    }
}

/// Decide which category a path belongs to, if any.
///
/// Only directory segments are inspected. When the path lies inside the root
/// folder, segments up to and including it are ignored so that a project
/// living under e.g. `/work/Scenes/game` is not misclassified. `Prefab` is checked
/// first, so a prefab nested under a scenes folder stays a prefab.
pub fn classify(path: &str, root: &RootContext) -> Option<Category> {
    let normalized = normalize_separators(path);
    let parts: Vec<&str> = segments(&normalized).collect();
    let dirs = match parts.split_last() {
        Some((_, dirs)) => dirs,
        None => return None,
    };

    let dirs = match root.locate(dirs) {
        Some(i) => &dirs[i..],
        None => dirs,
    };

    Category::ALL
        .into_iter()
        .find(|category| dirs.iter().any(|segment| category.matches_folder(segment)))
}

/// Filter and classify candidate paths.
///
/// Input order is preserved within each category and duplicates are kept.
pub fn collect<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    extension: &str,
    root: &RootContext,
) -> CollectedAssets {
    let mut collected = CollectedAssets::default();

    for path in candidates {
        if !has_extension(path, extension) {
            log::debug!("skipping '{}': not a .{} file", path, extension);
            continue;
        }
        match classify(path, root) {
            Some(category) => {
                log::debug!("classified '{}' as {}", path, category);
                collected.push(ClassifiedAsset::new(category, path));
            }
            None => log::debug!("skipping '{}': not under a category folder", path),
        }
    }

    collected
}
