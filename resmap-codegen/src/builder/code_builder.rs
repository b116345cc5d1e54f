//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use resmap_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::rust();
/// builder
///     .push_line("pub enum Scene {")
///     .push_indent()
///     .push_line("MainMenu,")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "pub enum Scene {\n    MainMenu,\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with Rust indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Create a new CodeBuilder with C# indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `///` doc comment line.
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Write one fragment, recursing into nested ones.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(&line);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for fragment in body {
                    self.apply_fragment(fragment);
                }
                self.push_dedent();
                self.push_line(&close);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let indent = self.indent.at_level(self.indent_level);
        self.buffer.push_str(&indent);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::rust();
        builder.push_line("let x = 1;");
        assert_eq!(builder.build(), "let x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::csharp();
        builder
            .push_line("public enum Scene")
            .push_line("{")
            .push_indent()
            .push_line("MainMenu,")
            .push_dedent()
            .push_line("}");
        assert_eq!(
            builder.build(),
            "public enum Scene\n{\n    MainMenu,\n}\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::rust();
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_blank_lines_have_no_indent() {
        let mut builder = CodeBuilder::rust();
        builder.push_indent().push_line("a").push_blank().push_line("b");
        assert_eq!(builder.build(), "    a\n\n    b\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::doc("Lookup"),
                    CodeFragment::block(
                        "match self {",
                        vec![CodeFragment::Line("Self::A => \"a\",".to_string())],
                        "}",
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::rust();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "/// Lookup\nmatch self {\n    Self::A => \"a\",\n}\n"
        );
    }

    #[test]
    fn test_emit_nested_blocks() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "{",
                    vec![
                        CodeFragment::Line("A,".to_string()),
                        CodeFragment::Blank,
                        CodeFragment::block("{", vec![CodeFragment::Line("B,".to_string())], "};"),
                    ],
                    "}",
                )]
            }
        }

        let mut builder = CodeBuilder::csharp();
        builder.emit(&Nested);
        assert_eq!(builder.build(), "{\n    A,\n\n    {\n        B,\n    };\n}\n");
    }
}
