//! Fragments of generated code and the trait that produces them.
//!
//! AST nodes in the language crates describe themselves as fragments; the
//! [`CodeBuilder`] lays the fragments out with indentation.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// A piece of generated code, before indentation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line; the builder adds indentation and the newline.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `header`, the body one level deeper, then `close`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// A `///` comment line. Rust docs and C# XML docs share the prefix.
    Doc(String),
}

impl CodeFragment {
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }

    pub fn doc(text: impl Into<String>) -> Self {
        Self::Doc(text.into())
    }
}

/// An AST node that can describe itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair;

    impl Renderable for Pair {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::Line("a".into()), CodeFragment::Blank]
        }
    }

    #[test]
    fn test_block_takes_close_line() {
        assert_eq!(
            CodeFragment::block("{", Vec::new(), "};"),
            CodeFragment::Block {
                header: "{".to_string(),
                body: Vec::new(),
                close: "};".to_string(),
            }
        );
    }

    fn fragments_of(node: impl Renderable) -> Vec<CodeFragment> {
        node.to_fragments()
    }

    #[test]
    fn test_reference_renders_like_owner() {
        assert_eq!(fragments_of(&Pair), Pair.to_fragments());
    }
}
