use thiserror::Error;

/// Errors raised while turning a discovered file path into an asset entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// No project root name was configured, so no path can be made relative.
    #[error("project root is not configured, cannot resolve '{path}'")]
    RootUnresolved { path: String },

    /// The path does not lie inside the project root folder.
    #[error("root folder '{root}' not found in '{path}'")]
    RootNotFound { path: String, root: String },

    /// The relative path has no segment naming the category folder.
    #[error("folder '{folder}' not found in '{path}'")]
    CategoryNotFound { path: String, folder: String },

    /// Nothing identifier-like is left once separators and the extension are removed.
    #[error("'{path}' does not produce a usable identifier")]
    EmptyIdentifier { path: String },
}

impl PathError {
    /// The offending path, as it was handed to the resolver.
    pub fn path(&self) -> &str {
        match self {
            Self::RootUnresolved { path }
            | Self::RootNotFound { path, .. }
            | Self::CategoryNotFound { path, .. }
            | Self::EmptyIdentifier { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_path() {
        let err = PathError::RootNotFound {
            path: "/tmp/other/Scenes/a.tscn".to_string(),
            root: "game".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "root folder 'game' not found in '/tmp/other/Scenes/a.tscn'"
        );
        assert_eq!(err.path(), "/tmp/other/Scenes/a.tscn");
    }
}
