//! Indentation unit for generated code.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// The given number of spaces per level.
    Spaces(usize),
    Tab,
}

impl Indent {
    /// rustfmt default.
    pub const RUST: Self = Self::Spaces(4);

    /// `dotnet format` default.
    pub const CSHARP: Self = Self::Spaces(4);

    /// Whitespace for `level` levels of indentation.
    pub fn at_level(&self, level: usize) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(width * level),
            Self::Tab => "\t".repeat(level),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_level() {
        assert_eq!(Indent::Spaces(2).at_level(3), "      ");
        assert_eq!(Indent::RUST.at_level(1), "    ");
        assert_eq!(Indent::Tab.at_level(2), "\t\t");
        assert_eq!(Indent::CSHARP.at_level(0), "");
    }
}
