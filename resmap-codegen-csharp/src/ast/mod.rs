//! C# AST builders for generating enums, static classes and switch expressions.

mod class;
mod enums;
mod switch;

pub use class::{Class, Method, Param};
pub use enums::{Enum, Member};
pub use switch::{Switch, SwitchArm};

/// Render `text` as a single-line XML `<summary>` doc comment.
pub(crate) fn summary(text: &str) -> resmap_codegen::CodeFragment {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    resmap_codegen::CodeFragment::doc(format!("<summary>{}</summary>", escaped))
}

/// Test shorthand rendering a node on its own.
#[cfg(test)]
pub(crate) trait Build: resmap_codegen::Renderable {
    fn build(&self) -> String where Self: Sized {
        let mut builder = resmap_codegen::CodeBuilder::csharp();
        builder.emit(self);
        builder.build()
    }
}

#[cfg(test)]
impl<T: resmap_codegen::Renderable> Build for T {}
