//! Native pick/save dialogs.
//!
//! A dismissed dialog is reported as `None` (or `false` for confirmations).

use std::path::PathBuf;

use rfd::{
    AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult,
    MessageLevel,
};

/// Extension filter hint shown by the open-file picker.
#[derive(Debug, Clone, Copy)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// Filters offered when opening a single file.
pub const OPEN_FILE_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "All Files",
        extensions: &["*"],
    },
    FileFilter {
        name: "Rust",
        extensions: &["rs"],
    },
    FileFilter {
        name: "JavaScript",
        extensions: &["js", "jsx", "ts", "tsx"],
    },
    FileFilter {
        name: "Python",
        extensions: &["py"],
    },
    FileFilter {
        name: "Web",
        extensions: &["html", "css", "json", "xml"],
    },
    FileFilter {
        name: "Text",
        extensions: &["txt", "md"],
    },
];

/// Ask the user for a folder.
pub async fn pick_folder() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Ask the user for a single file, offering `filters` as hints.
pub async fn pick_file(filters: &[FileFilter]) -> Option<PathBuf> {
    let mut dialog = AsyncFileDialog::new();
    for filter in filters {
        dialog = dialog.add_filter(filter.name, filter.extensions);
    }
    dialog.pick_file().await.map(|handle| handle.path().to_path_buf())
}

/// Ask the user where to save, pre-filling `suggested_name`.
pub async fn pick_save_location(suggested_name: String) -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_file_name(suggested_name)
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Ask whether unsaved buffer content may be discarded.
pub async fn confirm_discard() -> bool {
    let result = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Create new file?")
        .set_description("Any unsaved changes will be lost.")
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;

    matches!(result, MessageDialogResult::Yes)
}
