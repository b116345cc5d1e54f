//! Shared code generation for resmap.
//!
//! This crate turns a list of candidate scene files into classified asset
//! modules, and provides the language-agnostic building blocks used by the
//! language generators (e.g., `resmap-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`assets`] - Collector and identifier deriver
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`pipeline`] - The resolve → collect → derive → validate pipeline

pub mod assets;
pub mod builder;
pub mod language;
pub mod pipeline;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, PreviewFile};
