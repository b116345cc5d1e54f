//! Generated Rust files.

mod asset_module;
mod mod_rs;

pub use asset_module::AssetModuleRs;
pub use mod_rs::ModRs;
