//! Built-in lints for asset module validation.

mod duplicate_identifier;
mod empty_category;

pub use duplicate_identifier::DuplicateIdentifierLint;
pub use empty_category::EmptyCategoryLint;
