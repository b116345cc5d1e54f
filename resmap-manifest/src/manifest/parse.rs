//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Manifest;
use crate::{
    Error, Result,
    error::SourceContext,
    validate::{is_valid_extension, validate_namespace},
};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "resmap.toml")
    }
}

impl Manifest {
    /// Parse a resmap.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if let Some(namespace) = &manifest.project.namespace {
        if let Some(reason) = validate_namespace(namespace.get_ref()) {
            return Err(ctx.invalid_namespace_error(
                namespace.get_ref(),
                reason,
                Some(namespace.span().into()),
            ));
        }
    }

    if let Some(extension) = &manifest.project.extension {
        if !is_valid_extension(extension.get_ref()) {
            return Err(ctx.invalid_extension_error(
                extension.get_ref(),
                Some(extension.span().into()),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_fields() {
        let err = Manifest::from_str("[project]\nroot = \"x\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_rejects_invalid_namespace() {
        let src = "[project]\nnamespace = \"my-game\"\n";
        let err = Manifest::from_str(src).unwrap_err();
        match *err {
            Error::InvalidNamespace { name, span, .. } => {
                assert_eq!(name, "my-game");
                let span = span.expect("namespace error should carry a span");
                assert!(src[span.offset()..span.offset() + span.len()].contains("my-game"));
            }
            other => panic!("expected invalid namespace, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_dotted_extension() {
        let err = Manifest::from_str("[project]\nextension = \".tscn\"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidExtension { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/definitely/not/here/resmap.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
