//! Turning candidate file paths into asset entries.
//!
//! - [`collect`] filters candidates by extension and classifies them by folder
//! - [`derive_entry`] computes the relative path, identifier and resource path

mod collect;
mod derive;

pub use collect::{CollectedAssets, classify, collect};
pub use derive::{derive_entry, derive_identifier};
