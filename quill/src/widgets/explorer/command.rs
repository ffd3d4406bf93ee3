use std::path::PathBuf;

use quill_gateway::DirectoryEntry;

/// Internal commands dispatched to the explorer reducer.
#[derive(Debug, Clone)]
pub(crate) enum ExplorerCommand {
    /// The "open folder" button was pressed.
    OpenFolder,
    /// The folder picker closed; `None` when cancelled.
    FolderPicked { root: Option<PathBuf> },
    /// Replace the tree root.
    SetRoot { root: PathBuf },
    /// Root directory listing arrived.
    RootLoaded {
        root: PathBuf,
        entries: Vec<DirectoryEntry>,
    },
    /// Root directory listing failed.
    RootLoadFailed { root: PathBuf, message: String },
    /// A tree row was clicked.
    NodePressed { path: PathBuf },
    /// The cursor entered a tree row.
    NodeHovered { path: PathBuf },
    /// The cursor left a tree row.
    NodeHoverLeft { path: PathBuf },
    /// Folder listing arrived.
    FolderLoaded {
        directory: PathBuf,
        entries: Vec<DirectoryEntry>,
    },
    /// Folder listing failed.
    FolderLoadFailed { directory: PathBuf, message: String },
    /// A file was loaded into the buffer.
    MarkActive { path: PathBuf },
}
