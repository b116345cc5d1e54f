//! Built-in pipeline phases.
//!
//! - [`ResolvePhase`] - resolves the project root folder
//! - [`CollectPhase`] - filters and classifies candidate files
//! - [`DerivePhase`] - derives asset entries and builds one module per category
//! - [`ValidatePhase`] - runs lints over the derived modules

mod collect;
mod derive;
mod resolve;
mod validate;

pub use collect::CollectPhase;
pub use derive::DerivePhase;
pub use resolve::ResolvePhase;
pub use validate::{DuplicateIdentifierLint, EmptyCategoryLint, Lint, ValidatePhase};
