use std::path::{Path, PathBuf};

use resmap_core::{GENERATED_NOTICE, GeneratedFile};
use resmap_ir::{AssetModule, Category};

use crate::{CSHARP_NAMING, Class, CodeFile, Enum, Member, Method, Param, Switch, SwitchArm};

/// One category file: an enum plus a static class mapping members to paths.
///
/// Both categories are rendered by this type, only the category differs.
pub struct AssetModuleCs<'a> {
    module: &'a AssetModule,
    namespace: &'a str,
}

impl<'a> AssetModuleCs<'a> {
    pub fn new(module: &'a AssetModule, namespace: &'a str) -> Self {
        Self { module, namespace }
    }

    /// File name for a category, e.g. `Prefabs.g.cs`.
    pub fn file_name(category: Category) -> String {
        format!("{}.g.cs", CSHARP_NAMING.file_name(category.folder()))
    }

    /// Name of the lookup class, e.g. `MapPrefabsToPaths`.
    pub fn class_name(category: Category) -> String {
        format!("Map{}ToPaths", category.folder())
    }

    fn member_names(&self) -> Vec<String> {
        self.module
            .entries
            .iter()
            .map(|entry| CSHARP_NAMING.safe_name(&entry.identifier))
            .collect()
    }
}

/// C# regular string literal for `value`.
fn csharp_string(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{:04x}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

impl GeneratedFile for AssetModuleCs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::file_name(self.module.category))
    }

    fn render(&self) -> String {
        let category = self.module.category;
        let type_name = category.type_name();
        let param = category.to_string();
        let names = self.member_names();

        let members = names
            .iter()
            .zip(&self.module.entries)
            .map(|(name, entry)| Member::new(name).doc(&entry.resource_path));
        let enumeration = Enum::new(type_name)
            .doc(format!(
                "Every {} found under a {} folder.",
                category,
                category.folder()
            ))
            .members(members);

        let arms = names.iter().zip(&self.module.entries).map(|(name, entry)| {
            SwitchArm::new(
                format!("{}.{}", type_name, name),
                csharp_string(&entry.resource_path),
            )
        });
        // C# enums are open, so the switch still needs a discard arm.
        let switch = Switch::new().arms(arms).discard(format!(
            "throw new System.ArgumentOutOfRangeException(nameof({}))",
            param
        ));

        let lookup = Class::new(Self::class_name(category))
            .modifiers("public static")
            .method(
                Method::new("GetPath", "string")
                    .modifiers("public static")
                    .doc(format!("Resource path of a {}.", category))
                    .param(Param::new(&param, type_name))
                    .expression(format!("{} switch", param))
                    .continuation(switch),
            );

        CodeFile::new(self.namespace)
            .add(enumeration)
            .add(lookup)
            .render_with_header(GENERATED_NOTICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(AssetModuleCs::file_name(Category::Prefab), "Prefabs.g.cs");
        assert_eq!(AssetModuleCs::file_name(Category::Scene), "Scenes.g.cs");
        assert_eq!(AssetModuleCs::class_name(Category::Prefab), "MapPrefabsToPaths");
        assert_eq!(AssetModuleCs::class_name(Category::Scene), "MapScenesToPaths");
    }

    #[test]
    fn test_csharp_string() {
        assert_eq!(csharp_string("res://a.tscn"), "\"res://a.tscn\"");
        assert_eq!(csharp_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
