//! Asset categories.

use std::fmt;

use serde::Serialize;

/// The role of a scene file, decided by the folder it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Reusable, instantiable template under a `Prefabs` folder.
    Prefab,
    /// Directly loadable scene under a `Scenes` folder.
    Scene,
}

impl Category {
    /// All categories, in classification priority order.
    pub const ALL: [Category; 2] = [Category::Prefab, Category::Scene];

    /// Reserved folder name that places a file in this category.
    pub fn folder(&self) -> &'static str {
        match self {
            Category::Prefab => "Prefabs",
            Category::Scene => "Scenes",
        }
    }

    /// Singular type name used for the generated identifier set.
    pub fn type_name(&self) -> &'static str {
        match self {
            Category::Prefab => "Prefab",
            Category::Scene => "Scene",
        }
    }

    /// Check whether a path segment names this category's folder, ignoring case.
    pub fn matches_folder(&self, segment: &str) -> bool {
        segment.eq_ignore_ascii_case(self.folder())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Prefab => write!(f, "prefab"),
            Category::Scene => write!(f, "scene"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_names() {
        assert_eq!(Category::Prefab.folder(), "Prefabs");
        assert_eq!(Category::Scene.folder(), "Scenes");
    }

    #[test]
    fn test_matches_folder_ignores_case() {
        assert!(Category::Prefab.matches_folder("prefabs"));
        assert!(Category::Prefab.matches_folder("PREFABS"));
        assert!(!Category::Prefab.matches_folder("Prefab"));
        assert!(Category::Scene.matches_folder("scenes"));
        assert!(!Category::Scene.matches_folder("Prefabs"));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(Category::ALL, [Category::Prefab, Category::Scene]);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Category::Prefab).unwrap(), r#""prefab""#);
    }
}
