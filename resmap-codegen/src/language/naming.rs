//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Derived asset identifiers are already PascalCase; a convention only has to
/// make them legal in the target language.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a category name to a generated file stem (e.g., "prefabs")
    pub module_to_file: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "Self" -> "Self_" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe identifier.
    ///
    /// Identifiers starting with a digit get a leading underscore; reserved
    /// words are escaped.
    pub fn safe_name(&self, name: &str) -> String {
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            return format!("_{name}");
        }
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a module name into a file stem.
    pub fn file_name(&self, name: &str) -> String {
        (self.module_to_file)(name)
    }
}
