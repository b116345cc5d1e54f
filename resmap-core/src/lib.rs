//! Core utilities and types for the resmap asset identifier generator.
//!
//! This crate provides the path handling, naming and file writing primitives
//! shared by the pipeline and the language generators.

mod error;
mod file;
mod path;
mod root;
mod utils;

pub use error::PathError;
pub use file::{File, GeneratedFile, WriteResult};
pub use path::{has_extension, normalize_separators, segments, strip_extension};
pub use root::RootContext;
pub use utils::{to_pascal_case, to_snake_case};

/// URI scheme understood by the engine's resource loader.
pub const RESOURCE_SCHEME: &str = "res://";

/// Extension of scene description files, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "tscn";

/// Notice placed at the top of every generated file.
pub const GENERATED_NOTICE: &str = "Generated by resmap. Do not edit.";
