use std::path::{Path, PathBuf};

use resmap_core::{GENERATED_NOTICE, GeneratedFile};
use resmap_ir::Category;

use crate::{RUST_NAMING, RawCode, RustFile, Use};

/// The `mod.rs` tying the category modules together.
pub struct ModRs<'a> {
    categories: Vec<Category>,
    namespace: &'a str,
}

impl<'a> ModRs<'a> {
    pub fn new(categories: impl IntoIterator<Item = Category>, namespace: &'a str) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            namespace,
        }
    }
}

impl GeneratedFile for ModRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("mod.rs")
    }

    fn render(&self) -> String {
        let module_names: Vec<String> = self
            .categories
            .iter()
            .map(|c| RUST_NAMING.file_name(c.folder()))
            .collect();

        let uses = self
            .categories
            .iter()
            .zip(&module_names)
            .map(|(category, module)| Use::new(module, category.type_name()));

        RustFile::new()
            .inner_doc(format!("Asset identifiers for `{}`.", self.namespace))
            .use_stmts(uses)
            .add(RawCode::lines(module_names.iter().map(|m| format!("mod {};", m))))
            .render_with_header(GENERATED_NOTICE)
    }
}
