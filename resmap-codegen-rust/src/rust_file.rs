//! RustFile abstraction for structured Rust file generation.

use resmap_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A `pub use module::Symbol;` re-export.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbol: String,
}

impl Use {
    pub fn new(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "pub use {}::{};",
            self.module, self.symbol
        ))]
    }
}

/// A structured representation of a Rust file.
///
/// Organizes code into inner docs, imports and body sections.
///
/// # Example
///
/// ```
/// use resmap_codegen_rust::{RawCode, RustFile, Use};
///
/// let file = RustFile::new()
///     .inner_doc("Generated asset identifiers.")
///     .use_stmts([Use::new("scenes", "Scene")])
///     .add(RawCode::lines(["mod scenes;"]))
///     .render();
///
/// assert_eq!(
///     file,
///     "//! Generated asset identifiers.\n\npub use scenes::Scene;\n\nmod scenes;\n"
/// );
/// ```
#[derive(Default)]
pub struct RustFile {
    inner_docs: Vec<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `//!` line documenting the module itself.
    pub fn inner_doc(mut self, doc: impl Into<String>) -> Self {
        self.inner_docs.push(doc.into());
        self
    }

    /// Add re-exports.
    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::RUST);
        let mut sections = 0;

        if !self.inner_docs.is_empty() {
            for doc in &self.inner_docs {
                builder.push_line(&format!("//! {}", doc));
            }
            sections += 1;
        }

        if !self.uses.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for use_stmt in &self.uses {
                builder.emit(use_stmt);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }

    /// Render the file below a `//` header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("// {}\n", header)
        } else {
            format!("// {}\n\n{}", header, content)
        }
    }
}

/// Verbatim lines of code.
#[derive(Debug, Clone)]
pub struct RawCode(Vec<String>);

impl RawCode {
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(lines.into_iter().map(Into::into).collect())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.iter().cloned().map(CodeFragment::Line).collect()
    }
}
