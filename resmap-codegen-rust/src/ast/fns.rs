//! Rust function and match expression builders.

use resmap_codegen::{CodeFragment, Renderable};

/// A parameter in a Rust function.
///
/// An empty type renders the name alone, which covers receivers like `self`.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// A by-value `self` receiver.
    pub fn receiver() -> Self {
        Self::new("self", "")
    }

    fn format(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    is_const: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_const: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a renderable node (e.g. a [`Match`]) to the function body.
    pub fn body_node(mut self, node: impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }


    fn signature(&self) -> String {
        let const_kw = if self.is_const { "const " } else { "" };
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!("pub {}fn {}({}) -> {} {{", const_kw, self.name, params, ret),
            None => format!("pub {}fn {}({}) {{", const_kw, self.name, params),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.push(CodeFragment::block(
            self.signature(),
            self.body.clone(),
            "}",
        ));

        fragments
    }
}

/// A match arm: `pattern => expr,`.
#[derive(Debug, Clone)]
pub struct Arm {
    pub pattern: String,
    pub expr: String,
}

impl Arm {
    pub fn new(pattern: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            expr: expr.into(),
        }
    }
}

/// Builder for `match` expressions.
///
/// A match without arms renders as `match x {}`, which is how an
/// uninhabited value is consumed.
#[derive(Debug, Clone)]
pub struct Match {
    scrutinee: String,
    arms: Vec<Arm>,
}

impl Match {
    pub fn new(scrutinee: impl Into<String>) -> Self {
        Self {
            scrutinee: scrutinee.into(),
            arms: Vec::new(),
        }
    }

    pub fn arms(mut self, arms: impl IntoIterator<Item = Arm>) -> Self {
        self.arms.extend(arms);
        self
    }
}

impl Renderable for Match {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.arms.is_empty() {
            return vec![CodeFragment::Line(format!("match {} {{}}", self.scrutinee))];
        }

        let arms = self
            .arms
            .iter()
            .map(|arm| CodeFragment::Line(format!("{} => {},", arm.pattern, arm.expr)))
            .collect();

        vec![CodeFragment::block(
            format!("match {} {{", self.scrutinee),
            arms,
            "}",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Build;

    #[test]
    fn test_simple_fn() {
        let f = Fn::new("reload").build();
        assert_eq!(f, "pub fn reload() {\n}\n");
    }

    #[test]
    fn test_const_fn_with_receiver() {
        let f = Fn::new("path")
            .const_()
            .param(Param::receiver())
            .returns("&'static str")
            .body_node(Match::new("self"))
            .build();
        assert_eq!(
            f,
            "pub const fn path(self) -> &'static str {\n    match self {}\n}\n"
        );
    }

    #[test]
    fn test_fn_with_doc_and_typed_param() {
        let f = Fn::new("lookup")
            .doc("Find a scene")
            .param(Param::new("name", "&str"))
            .build();
        assert!(f.starts_with("/// Find a scene\npub fn lookup(name: &str) {"));
    }

    #[test]
    fn test_match_in_body() {
        let f = Fn::new("path")
            .param(Param::receiver())
            .returns("&'static str")
            .body_node(Match::new("self").arms([
                Arm::new("Self::A", "\"a\""),
                Arm::new("Self::B", "\"b\""),
            ]))
            .build();
        assert!(f.contains("    match self {\n        Self::A => \"a\",\n"));
        assert!(f.contains("        Self::B => \"b\",\n    }\n"));
    }

    #[test]
    fn test_empty_match() {
        assert_eq!(Match::new("self").build(), "match self {}\n");
    }
}
