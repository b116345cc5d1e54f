use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The manifest text and its file name, so every error can point into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// The manifest as a miette source.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Wrap a toml error, labelled at its span when toml reports one.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn invalid_namespace_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidNamespace {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    pub fn invalid_extension_error(
        &self,
        extension: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidExtension {
            src: self.named_source(),
            span,
            extension: extension.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(resmap::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse resmap.toml")]
    #[diagnostic(code(resmap::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid namespace '{name}'")]
    #[diagnostic(
        code(resmap::invalid_namespace),
        help("{reason}. Use letters, digits and underscores, starting with a letter or underscore")
    )]
    InvalidNamespace {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid namespace")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("invalid extension '{extension}'")]
    #[diagnostic(
        code(resmap::invalid_extension),
        help("give the extension without a leading dot, e.g. \"tscn\"")
    )]
    InvalidExtension {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid extension")]
        span: Option<SourceSpan>,
        extension: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_namespace_message() {
        let ctx = SourceContext::new("[project]\nnamespace = \"1game\"\n", "resmap.toml");
        let err = ctx.invalid_namespace_error("1game", "starts with a digit", None);
        assert_eq!(err.to_string(), "invalid namespace '1game'");
    }

    #[test]
    fn test_parse_error_has_span() {
        let ctx = SourceContext::new("[project\n", "resmap.toml");
        let toml_err = toml::from_str::<toml::Table>("[project\n").unwrap_err();
        let err = ctx.parse_error(toml_err);
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
