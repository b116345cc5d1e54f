//! Rust AST builders for generating enums, impls, consts and functions.
//!
//! These provide a high-level API for constructing Rust syntax, rendered
//! through [`CodeFragment`](resmap_codegen::CodeFragment)s.

mod consts;
mod enums;
mod fns;
mod impls;

pub use consts::Const;
pub use enums::{Enum, Variant};
pub use fns::{Arm, Fn, Match, Param};
pub use impls::Impl;

/// Test shorthand rendering a node on its own.
#[cfg(test)]
pub(crate) trait Build: resmap_codegen::Renderable {
    fn build(&self) -> String where Self: Sized {
        let mut builder = resmap_codegen::CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

#[cfg(test)]
impl<T: resmap_codegen::Renderable> Build for T {}
