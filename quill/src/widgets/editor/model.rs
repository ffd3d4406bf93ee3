use std::time::Duration;

use iced::widget::text_editor;

/// Autosave only fires when the last save is older than this.
pub(crate) const AUTOSAVE_THRESHOLD: Duration = Duration::from_secs(30);
/// Transient status messages revert to [`IDLE_STATUS`] after this.
pub(crate) const STATUS_LIFETIME: Duration = Duration::from_secs(3);

pub(crate) const IDLE_STATUS: &str = "Ready";
pub(crate) const UNTITLED_FILE_NAME: &str = "untitled.js";
pub(crate) const NEW_FILE_TEXT: &str = "// New file\n";
pub(crate) const MODIFIED_MARKER: &str = " •";

pub(crate) const WELCOME_TEXT: &str = "\
// Welcome to Quill
//
// Open a folder from the explorer to browse your project,
// or press Ctrl+O to open a single file.
//
// Ctrl+S  save
// Ctrl+N  new file
// Ctrl+F  find
// Ctrl+H  replace
// Ctrl+B  toggle sidebar
// F11     toggle full screen

function hello() {
    console.log(\"Hello, Quill!\");
}
";

/// Name shown in the title bar, with a marker while unsaved.
pub(crate) fn display_name(file_name: Option<&str>, is_modified: bool) -> String {
    let name = file_name.unwrap_or(UNTITLED_FILE_NAME);
    if is_modified {
        format!("{name}{MODIFIED_MARKER}")
    } else {
        name.to_string()
    }
}

/// Human readable byte count.
pub(crate) fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = bytes as f64;
    if value < KB {
        format!("{bytes} B")
    } else if value < MB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{:.1} MB", value / MB)
    }
}

/// View model for the find bar, present only while it is open.
pub(crate) struct FindBarViewModel<'a> {
    pub(crate) show_replace: bool,
    pub(crate) query: &'a str,
    pub(crate) replacement: &'a str,
    pub(crate) input_id: &'a iced::widget::Id,
}

/// View model for the editing surface.
pub(crate) struct EditorPaneViewModel<'a> {
    pub(crate) content: &'a text_editor::Content,
    pub(crate) highlight_token: &'static str,
}

/// View model for the bottom status bar.
#[derive(Debug, Clone)]
pub(crate) struct StatusBarViewModel<'a> {
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) line_count: usize,
    pub(crate) file_size: Option<String>,
    pub(crate) message: &'a str,
    pub(crate) mode_name: &'static str,
    pub(crate) autosave_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::{display_name, format_file_size};

    #[test]
    fn given_modified_buffer_when_named_then_marker_is_appended() {
        assert_eq!(display_name(Some("main.rs"), true), "main.rs •");
        assert_eq!(display_name(Some("main.rs"), false), "main.rs");
        assert_eq!(display_name(None, false), "untitled.js");
    }

    #[test]
    fn given_byte_counts_when_formatted_then_unit_scales() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }
}
