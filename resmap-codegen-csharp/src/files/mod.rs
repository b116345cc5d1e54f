//! Generated C# files.

mod asset_module;

pub use asset_module::AssetModuleCs;
