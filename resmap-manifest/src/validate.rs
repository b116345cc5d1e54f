//! Validation of configured names.

/// Check that a namespace is a dot-separated list of identifiers.
///
/// Returns the reason it is invalid, or `None` when it is fine.
pub fn validate_namespace(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("namespace cannot be empty".to_string());
    }

    name.split('.').find_map(validate_identifier)
}

/// Check that a name is a plain identifier.
pub fn validate_identifier(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("namespace segments cannot be empty".to_string());
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return Some(format!("'{}' must start with a letter or underscore", name));
    }

    if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Some(format!("'{}' contains invalid character '{}'", name, bad));
    }

    None
}

/// Check that an extension is a bare extension such as `tscn`.
pub fn is_valid_extension(extension: &str) -> bool {
    !extension.is_empty()
        && !extension
            .chars()
            .any(|c| matches!(c, '.' | '/' | '\\') || c.is_whitespace())
}
