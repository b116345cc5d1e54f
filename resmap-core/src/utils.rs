//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "goblin_warrior" -> "GoblinWarrior").
///
/// Underscores and hyphens mark word boundaries. The first character of each
/// word is uppercased and the rest is kept as written, so digits pass through
/// untouched ("level_2" -> "Level2").
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}
