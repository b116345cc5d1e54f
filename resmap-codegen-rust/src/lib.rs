//! Rust code generator for resmap.
//!
//! Each asset category becomes a fieldless enum with an exhaustive `path`
//! lookup, so every identifier maps to its resource path at compile time.

mod generator;
mod naming;
mod rust_file;

pub mod ast;
pub mod files;

pub use ast::{Arm, Const, Enum, Fn, Impl, Match, Param, Variant};
pub use generator::Generator;
pub use naming::RUST_NAMING;
pub use resmap_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use rust_file::{RawCode, RustFile, Use};
