//! Project root resolution.

use crate::{PathError, normalize_separators, segments};

/// Location of the folder that holds the game project.
///
/// Resource paths are made relative to this folder, so `res://` URIs match
/// what the engine sees regardless of where the project sits on disk.
///
/// An absolute project directory anchors candidates by prefix, so an
/// ancestor folder sharing the project's name is never mistaken for the
/// root. A relative directory, including a bare folder name, is searched
/// for as a run of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootContext {
    anchor: Vec<String>,
    absolute: bool,
}

impl RootContext {
    /// Create a root context from a bare folder name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::from_dir(&normalize_separators(&name), false)
    }

    fn from_dir(normalized: &str, absolute: bool) -> Self {
        Self {
            anchor: segments(normalized).map(str::to_string).collect(),
            absolute,
        }
    }

    /// Resolve the root from the configured project directory.
    ///
    /// The whole directory anchors later lookups and its last segment names
    /// the root folder. A missing or blank value is not an error here: a
    /// warning is logged and an empty root is returned, which makes every
    /// later [`RootContext::relative_path`] call fail.
    pub fn resolve(project_dir: Option<&str>) -> Self {
        let root = project_dir
            .map(normalize_separators)
            .map(|dir| Self::from_dir(&dir, is_absolute(&dir)))
            .unwrap_or_default();

        if root.is_empty() {
            log::warn!("project directory is not configured, resource paths cannot be resolved");
        } else {
            log::debug!(
                "resolved project root folder '{}' ({})",
                root.name(),
                root.anchor.join("/")
            );
        }
        root
    }

    /// The root folder name.
    pub fn name(&self) -> &str {
        self.anchor.last().map_or("", String::as_str)
    }

    /// Whether resolution fell back to an empty root.
    pub fn is_empty(&self) -> bool {
        self.anchor.is_empty()
    }

    /// Index of the first segment of `parts` that lies below the root.
    ///
    /// Returns `None` when the path is not inside the root folder. Segments
    /// are compared ignoring case.
    pub fn locate(&self, parts: &[&str]) -> Option<usize> {
        let len = self.anchor.len();
        if len == 0 || parts.len() < len {
            return None;
        }

        let matches_at = |start: usize| {
            self.anchor
                .iter()
                .zip(&parts[start..start + len])
                .all(|(a, p)| a.eq_ignore_ascii_case(p))
        };

        if self.absolute {
            matches_at(0).then_some(len)
        } else {
            (0..=parts.len() - len).find(|&i| matches_at(i)).map(|i| i + len)
        }
    }

    /// Path of `path` relative to the root folder, with `/` separators.
    ///
    /// Everything below the root is returned, extension included.
    pub fn relative_path(&self, path: &str) -> Result<String, PathError> {
        if self.is_empty() {
            return Err(PathError::RootUnresolved {
                path: path.to_string(),
            });
        }

        let normalized = normalize_separators(path);
        let parts: Vec<&str> = segments(&normalized).collect();

        let relative = self
            .locate(&parts)
            .map(|i| parts[i..].join("/"))
            .filter(|rest| !rest.is_empty());

        relative.ok_or_else(|| PathError::RootNotFound {
            path: path.to_string(),
            root: self.name().to_string(),
        })
    }
}

/// Whether a normalized path is rooted, either `/...` or a drive like `C:/...`.
fn is_absolute(normalized: &str) -> bool {
    let bytes = normalized.as_bytes();
    normalized.starts_with('/')
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}
