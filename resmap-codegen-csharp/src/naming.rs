//! C#-specific naming conventions.

use resmap_codegen::NamingConvention;

fn escape_csharp_reserved(name: &str) -> String {
    format!("@{}", name)
}

fn folder_to_file(name: &str) -> String {
    name.to_string()
}

/// C# naming conventions.
///
/// Identifiers are PascalCase or digit-led and C# keywords are all lowercase,
/// so no keyword list is needed. Leading digits are still prefixed.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    module_to_file: folder_to_file,
    reserved_words: &[],
    escape_reserved: escape_csharp_reserved,
};

#[cfg(test)]
mod tests {
    use resmap_core::to_pascal_case;

    use super::*;

    #[test]
    fn test_csharp_naming_file() {
        assert_eq!(CSHARP_NAMING.file_name("Prefabs"), "Prefabs");
    }

    #[test]
    fn test_csharp_keyword_file_stems_pass_through() {
        for stem in ["class", "string", "event", "enemies_base"] {
            let name = to_pascal_case(stem);
            assert!(!CSHARP_NAMING.is_reserved(&name));
            assert_eq!(CSHARP_NAMING.safe_name(&name), name);
        }
    }

    #[test]
    fn test_csharp_leading_digit() {
        assert_eq!(CSHARP_NAMING.safe_name("2dMap"), "_2dMap");
    }
}
