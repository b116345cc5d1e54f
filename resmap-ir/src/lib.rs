//! Intermediate representation types for resmap.
//!
//! These types carry discovered assets from the collector, through
//! identifier derivation, to the language generators.
//!
//! # Architecture
//!
//! ```text
//! candidate paths → ClassifiedAsset (collect) → AssetEntry (derive) → AssetModule → codegen
//! ```
//!
//! The IR is language-agnostic: identifiers are already normalized, but no
//! Rust or C# specific escaping has been applied.

mod asset;
mod category;

pub use asset::{AssetEntry, AssetModule, ClassifiedAsset};
pub use category::Category;
