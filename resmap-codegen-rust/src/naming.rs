//! Rust-specific naming conventions.

use resmap_codegen::NamingConvention;
use resmap_core::to_snake_case;

fn escape_rust_reserved(name: &str) -> String {
    // `Self` cannot be a raw identifier, so append instead of `r#`.
    format!("{}_", name)
}

/// Rust naming conventions.
///
/// Asset identifiers are PascalCase, so `Self` is the only keyword they can
/// ever spell.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    module_to_file: to_snake_case,
    reserved_words: &["Self"],
    escape_reserved: escape_rust_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_naming_file() {
        assert_eq!(RUST_NAMING.file_name("Prefabs"), "prefabs");
        assert_eq!(RUST_NAMING.file_name("Scenes"), "scenes");
    }

    #[test]
    fn test_rust_escape_reserved() {
        assert_eq!(RUST_NAMING.safe_name("Self"), "Self_");
        assert_eq!(RUST_NAMING.safe_name("MainMenu"), "MainMenu");
    }

    #[test]
    fn test_rust_leading_digit() {
        assert_eq!(RUST_NAMING.safe_name("2dMap"), "_2dMap");
    }
}
