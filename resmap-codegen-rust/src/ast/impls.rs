//! Rust impl block builder.

use resmap_codegen::{CodeFragment, Renderable};

use super::{Const, Fn};

/// Builder for Rust impl blocks.
///
/// Associated constants are rendered before methods, separated by blank lines.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    consts: Vec<Const>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            consts: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn constant(mut self, constant: Const) -> Self {
        self.consts.push(constant);
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }


    fn items_to_fragments(&self) -> Vec<CodeFragment> {
        let items = self
            .consts
            .iter()
            .map(Renderable::to_fragments)
            .chain(self.methods.iter().map(Renderable::to_fragments));

        let mut fragments = Vec::new();
        for (i, item) in items.enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(item);
        }
        fragments
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("impl {} {{", self.type_name),
            self.items_to_fragments(),
            "}",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Arm, Build, Match, Param};

    #[test]
    fn test_empty_impl() {
        assert_eq!(Impl::new("Foo").build(), "impl Foo {\n}\n");
    }

    #[test]
    fn test_impl_with_const_and_method() {
        let i = Impl::new("Scene")
            .constant(Const::new("ALL", "&'static [Scene]").slice(["Scene::Main"]))
            .method(
                Fn::new("path")
                    .const_()
                    .param(Param::receiver())
                    .returns("&'static str")
                    .body_node(Match::new("self").arms([Arm::new("Self::Main", "\"m\"")])),
            )
            .build();
        assert_eq!(
            i,
            "impl Scene {\n    \
             pub const ALL: &'static [Scene] = &[\n        Scene::Main,\n    ];\n\n    \
             pub const fn path(self) -> &'static str {\n        \
             match self {\n            Self::Main => \"m\",\n        }\n    }\n}\n"
        );
    }
}
