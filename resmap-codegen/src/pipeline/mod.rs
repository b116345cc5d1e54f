//! Generation pipeline.
//!
//! A [`Pipeline`] runs the built-in phases over a [`GenerationInput`]:
//!
//! - `resolve` - determine the project root folder
//! - `collect` - filter candidates by extension and classify them
//! - `derive` - compute relative paths, identifiers and resource paths
//! - `validate` - run lints (identifier collisions, empty categories)
//!
//! Plugins are called before and after each phase, and every phase records
//! its findings as [`Diagnostic`]s on the [`CompilationContext`].
//!
//! # Example
//!
//! ```
//! use resmap_codegen::pipeline::{GenerationInput, Pipeline};
//!
//! let input = GenerationInput::new(
//!     vec![
//!         "/dev/game/Prefabs/Enemies/goblin_warrior.tscn".to_string(),
//!         "/dev/game/Scenes/main_menu.tscn".to_string(),
//!     ],
//!     "game",
//! )
//! .with_project_dir("/dev/game");
//!
//! let mut ctx = Pipeline::new().run(input).unwrap();
//! let modules = ctx.take_modules();
//! assert_eq!(modules[0].entries[0].identifier, "EnemiesGoblinWarrior");
//! assert_eq!(
//!     modules[0].entries[0].resource_path,
//!     "res://Prefabs/Enemies/goblin_warrior.tscn"
//! );
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{CompilationContext, GenerationInput};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::{LogPlugin, Plugin};
pub use runner::Pipeline;
