//! Glyphs used by the file tree and window chrome.

use crate::shared::file_kind::extension_of;

pub(crate) const FOLDER: &str = "📁";
pub(crate) const FOLDER_EXPANDED_TOGGLE: &str = "▼";
pub(crate) const FOLDER_COLLAPSED_TOGGLE: &str = "▶";
pub(crate) const GENERIC_FILE: &str = "📄";

pub(crate) const WINDOW_MINIMIZE: &str = "—";
pub(crate) const WINDOW_MAXIMIZE: &str = "□";
pub(crate) const WINDOW_RESTORE: &str = "❐";
pub(crate) const WINDOW_CLOSE: &str = "✕";
pub(crate) const SIDEBAR_TOGGLE: &str = "☰";

/// Pick a tree icon from the file extension.
pub(crate) fn file_icon(file_name: &str) -> &'static str {
    match extension_of(file_name).as_str() {
        "js" => "📜",
        "jsx" | "tsx" => "⚛️",
        "ts" => "📘",
        "py" => "🐍",
        "html" => "🌐",
        "css" => "🎨",
        "json" => "{ }",
        "xml" => "📄",
        "rb" => "💎",
        "php" => "🐘",
        "go" => "🐹",
        "java" => "☕",
        "c" | "cpp" => "⚙️",
        "txt" => "📝",
        "md" => "📋",
        _ => GENERIC_FILE,
    }
}

#[cfg(test)]
mod tests {
    use super::{GENERIC_FILE, file_icon};

    #[test]
    fn given_known_extension_in_any_case_when_resolved_then_icon_matches() {
        assert_eq!(file_icon("main.PY"), "🐍");
        assert_eq!(file_icon("app.tsx"), "⚛️");
    }

    #[test]
    fn given_unknown_extension_when_resolved_then_generic_icon_is_used() {
        assert_eq!(file_icon("Makefile"), GENERIC_FILE);
        assert_eq!(file_icon("archive.tar.zst"), GENERIC_FILE);
    }
}
