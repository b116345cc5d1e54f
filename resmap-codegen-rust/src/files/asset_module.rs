use std::path::{Path, PathBuf};

use resmap_core::{GENERATED_NOTICE, GeneratedFile};
use resmap_ir::{AssetModule, Category};

use crate::{Arm, Const, Enum, Fn, Impl, Match, Param, RUST_NAMING, RustFile, Variant};

/// One category module: a fieldless enum plus its exhaustive path lookup.
///
/// Both categories are rendered by this type, only the category differs.
pub struct AssetModuleRs<'a> {
    module: &'a AssetModule,
    namespace: &'a str,
}

impl<'a> AssetModuleRs<'a> {
    pub fn new(module: &'a AssetModule, namespace: &'a str) -> Self {
        Self { module, namespace }
    }

    /// File name of the module for a category, e.g. `prefabs.rs`.
    pub fn file_name(category: Category) -> String {
        format!("{}.rs", RUST_NAMING.file_name(category.folder()))
    }

    fn variant_names(&self) -> Vec<String> {
        self.module
            .entries
            .iter()
            .map(|entry| RUST_NAMING.safe_name(&entry.identifier))
            .collect()
    }

    fn build_enum(&self, names: &[String]) -> Enum {
        let category = self.module.category;
        let variants = names
            .iter()
            .zip(&self.module.entries)
            .map(|(name, entry)| Variant::new(name).doc(format!("`{}`", entry.resource_path)));

        let mut e = Enum::new(category.type_name())
            .doc(format!(
                "Every {} found under a `{}` folder.",
                category,
                category.folder()
            ))
            .derives(["Debug", "Clone", "Copy", "PartialEq", "Eq", "Hash"])
            .variants(variants);

        // Escaped reserved words keep a trailing underscore.
        if names
            .iter()
            .any(|name| name.trim_start_matches('_').contains('_'))
        {
            e = e.attr("allow(non_camel_case_types)");
        }
        e
    }

    fn build_impl(&self, names: &[String]) -> Impl {
        let category = self.module.category;
        let type_name = category.type_name();

        let all = Const::new("ALL", format!("&'static [{}]", type_name))
            .doc(format!("Every {}, in discovery order.", category))
            .slice(names.iter().map(|name| format!("{}::{}", type_name, name)));

        let arms = names
            .iter()
            .zip(&self.module.entries)
            .map(|(name, entry)| {
                Arm::new(format!("Self::{}", name), rust_string(&entry.resource_path))
            });

        let path = Fn::new("path")
            .doc(format!("Resource path of this {}.", category))
            .const_()
            .param(Param::receiver())
            .returns("&'static str")
            .body_node(Match::new("self").arms(arms));

        Impl::new(type_name).constant(all).method(path)
    }
}

/// Rust string literal for `value`.
fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

impl GeneratedFile for AssetModuleRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::file_name(self.module.category))
    }

    fn render(&self) -> String {
        let names = self.variant_names();
        RustFile::new()
            .inner_doc(format!(
                "{} resource paths for `{}`.",
                self.module.category.type_name(),
                self.namespace
            ))
            .add(self.build_enum(&names))
            .add(self.build_impl(&names))
            .render_with_header(GENERATED_NOTICE)
    }
}
