//! Stylesheet category naming rules.

use std::path::Path;

/// Category assigned to stylesheets added without one.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Category established by a top-level directory: its lower-cased name.
pub fn category_from_dir(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Category established by a top-level file: its name without extension.
pub fn category_from_file(file: &Path) -> String {
    file.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Normalize a configured extension to `.ext` lower-case form.
///
/// Accepts both `css` and `.css`.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
    format!(".{ext}")
}

/// Extension of `path` in `.ext` lower-case form, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(normalize_extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_category_from_dir_lowercases() {
        assert_eq!(category_from_dir(&PathBuf::from("styles/Layout")), "layout");
        assert_eq!(category_from_dir(&PathBuf::from("BASE")), "base");
    }

    #[test]
    fn test_category_from_file_keeps_case() {
        assert_eq!(category_from_file(&PathBuf::from("Reset.css")), "Reset");
        assert_eq!(
            category_from_file(&PathBuf::from("styles/a-critical.css")),
            "a-critical"
        );
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("css"), ".css");
        assert_eq!(normalize_extension(".CSS"), ".css");
        assert_eq!(normalize_extension(" .scss "), ".scss");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(&PathBuf::from("a.CSS")), Some(".css".into()));
        assert_eq!(extension_of(&PathBuf::from("a.min.css")), Some(".css".into()));
        assert_eq!(extension_of(&PathBuf::from("Makefile")), None);
    }
}
