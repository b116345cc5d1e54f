//! Rust slice constant builder.

use resmap_codegen::{CodeFragment, Renderable};

/// Builder for `pub const NAME: &'static [T] = &[..];` items.
///
/// Elements are written one per line; an empty slice stays on one line.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    ty: String,
    doc: Option<String>,
    items: Vec<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            items: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Set the elements of the slice literal.
    pub fn slice(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let decl = format!("pub const {}: {}", self.name, self.ty);
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }

        if self.items.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} = &[];", decl)));
        } else {
            fragments.push(CodeFragment::block(
                format!("{} = &[", decl),
                self.items
                    .iter()
                    .map(|item| CodeFragment::Line(format!("{},", item)))
                    .collect(),
                "];",
            ));
        }

        fragments
    }
}
