//! C# code generator for resmap.
//!
//! Produces, per asset category, an `enum` and a static class whose `GetPath`
//! method maps every member to its resource path with a `switch` expression.
//!
//! ```ignore
//! use resmap_codegen::{LanguageCodegen, pipeline::Pipeline};
//! use resmap_codegen_csharp::Generator;
//!
//! let ctx = Pipeline::new().run(input)?;
//! let generator = Generator::from_context(ctx);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("Generated"))?;
//! ```
//!
//! # Generated Output
//!
//! - `Prefabs.g.cs` - `enum Prefab` and `MapPrefabsToPaths.GetPath`
//! - `Scenes.g.cs` - `enum Scene` and `MapScenesToPaths.GetPath`

mod code_file;
mod generator;
mod naming;

pub mod ast;
pub mod files;

pub use ast::{Class, Enum, Member, Method, Param, Switch, SwitchArm};
pub use code_file::CodeFile;
pub use generator::Generator;
pub use naming::CSHARP_NAMING;
pub use resmap_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
