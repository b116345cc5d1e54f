//! Language types for code generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Rust
    #[default]
    Rust,
    /// C# (Godot .NET projects)
    CSharp,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::CSharp => "csharp",
        }
    }

    /// Output directory used when the manifest does not name one.
    pub fn default_output_dir(&self) -> &'static str {
        match self {
            Language::Rust => "src/generated",
            Language::CSharp => "Generated",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" | "rs" => Ok(Language::Rust),
            "csharp" | "cs" | "c#" => Ok(Language::CSharp),
            _ => Err(format!(
                "unknown language '{}', expected 'rust' or 'csharp'",
                s
            )),
        }
    }
}
