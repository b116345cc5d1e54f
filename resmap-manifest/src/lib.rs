// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for resmap, read from `resmap.toml`.
//!
//! Every setting is optional. A project without a `resmap.toml` behaves like
//! one with an empty file.

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use manifest::{Language, Manifest, OutputConfig, ProjectConfig, ResmapToml};
pub use validate::validate_namespace;
