//! Separator-agnostic path helpers.
//!
//! Candidate paths arrive from the host build with whatever separator the
//! platform used, so everything here works on plain strings with `/` as the
//! canonical separator rather than on `std::path::Path`.

/// Replace every backslash with a forward slash.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Non-empty segments of a normalized path.
pub fn segments(path: &str) -> impl DoubleEndedIterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Check whether the file name ends in `.{extension}`, ignoring case.
pub fn has_extension(path: &str, extension: &str) -> bool {
    let normalized = normalize_separators(path);
    let Some(file_name) = segments(&normalized).next_back() else {
        return false;
    };

    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.eq_ignore_ascii_case(extension),
        None => false,
    }
}

/// Drop the extension from the final segment of a normalized path.
///
/// Only the last dot of the file name counts, directory names are left alone.
pub fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(dot) => &path[..name_start + dot],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_separators() {
        assert_eq!(
            normalize_separators(r"C:\game\Prefabs\goblin.tscn"),
            "C:/game/Prefabs/goblin.tscn"
        );
        assert_eq!(normalize_separators("a/b\\c"), "a/b/c");
    }

    #[test]
    fn test_segments_skip_empty() {
        let parts: Vec<_> = segments("/home//game/Scenes/").collect();
        assert_eq!(parts, ["home", "game", "Scenes"]);
    }

    #[test]
    fn test_has_extension_case_insensitive() {
        assert!(has_extension("game/Scenes/main.tscn", "tscn"));
        assert!(has_extension("game/Scenes/MAIN.TSCN", "tscn"));
        assert!(has_extension(r"game\Scenes\main.Tscn", "tscn"));
    }

    #[test]
    fn test_has_extension_rejects_others() {
        assert!(!has_extension("game/Scenes/main.tres", "tscn"));
        assert!(!has_extension("game/Scenes/main.tscn.import", "tscn"));
        assert!(!has_extension("game/Scenes/tscn", "tscn"));
        assert!(!has_extension("game/Scenes.tscn/readme", "tscn"));
        assert!(!has_extension("", "tscn"));
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("Enemies/goblin.tscn"), "Enemies/goblin");
        assert_eq!(strip_extension("v1.2/boss.final.tscn"), "v1.2/boss.final");
        assert_eq!(strip_extension("v1.2/boss"), "v1.2/boss");
        assert_eq!(strip_extension("boss"), "boss");
    }
}
