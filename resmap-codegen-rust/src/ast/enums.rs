//! Rust enum builder.

use resmap_codegen::{CodeFragment, Renderable};

/// A unit variant in a Rust enum.
#[derive(Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub doc: Option<String>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Builder for fieldless Rust enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    attrs: Vec<String>,
    variants: Vec<Variant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            attrs: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derives(mut self, derives: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.derives.extend(derives.into_iter().map(Into::into));
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.variants.extend(variants);
        self
    }


    fn variants_to_fragments(&self) -> Vec<CodeFragment> {
        self.variants
            .iter()
            .flat_map(|variant| {
                let mut fragments = Vec::new();
                if let Some(doc) = &variant.doc {
                    fragments.push(CodeFragment::doc(doc));
                }
                fragments.push(CodeFragment::Line(format!("{},", variant.name)));
                fragments
            })
            .collect()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        if self.variants.is_empty() {
            fragments.push(CodeFragment::Line(format!("pub enum {} {{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("pub enum {} {{", self.name),
                self.variants_to_fragments(),
                "}",
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Build;

    #[test]
    fn test_empty_enum() {
        let e = Enum::new("Prefab").build();
        assert_eq!(e, "pub enum Prefab {}\n");
    }

    #[test]
    fn test_enum_with_derives() {
        let e = Enum::new("Scene")
            .derives(["Debug", "Clone", "Copy"])
            .variants([Variant::new("MainMenu"), Variant::new("Credits")])
            .build();
        assert_eq!(
            e,
            "#[derive(Debug, Clone, Copy)]\npub enum Scene {\n    MainMenu,\n    Credits,\n}\n"
        );
    }

    #[test]
    fn test_variant_with_doc() {
        let e = Enum::new("Scene")
            .attr("allow(non_camel_case_types)")
            .variants([Variant::new("Self_").doc("`res://Scenes/self.tscn`")])
            .build();
        assert!(e.starts_with("#[allow(non_camel_case_types)]\npub enum Scene {"));
        assert!(e.contains("    /// `res://Scenes/self.tscn`\n    Self_,"));
    }
}
