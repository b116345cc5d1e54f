//! CodeFile abstraction for structured C# file generation.

use resmap_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of a C# file.
///
/// Renders a file-scoped namespace followed by the body elements, each
/// separated by a blank line.
///
/// # Example
///
/// ```
/// use resmap_codegen_csharp::{CodeFile, Enum};
///
/// let file = CodeFile::new("Game.Assets").add(Enum::new("Scene")).render();
///
/// assert_eq!(file, "namespace Game.Assets;\n\npublic enum Scene\n{\n}\n");
/// ```
pub struct CodeFile {
    namespace: String,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            body: Vec::new(),
        }
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with C# indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::CSHARP);
        builder.push_line(&format!("namespace {};", self.namespace));

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Render the file below the `<auto-generated />` marker and a notice line.
    ///
    /// The marker makes analyzers and style checks skip the file.
    pub fn render_with_header(&self, notice: &str) -> String {
        format!("// <auto-generated />\n// {}\n\n{}", notice, self.render())
    }
}
