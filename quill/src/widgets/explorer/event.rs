use std::path::PathBuf;

use quill_gateway::DirectoryEntry;

/// UI and completion events handled by the explorer.
#[derive(Debug, Clone)]
pub(crate) enum ExplorerEvent {
    OpenFolderPressed,
    FolderPicked {
        root: Option<PathBuf>,
    },
    NodePressed {
        path: PathBuf,
    },
    NodeHovered {
        path: PathBuf,
    },
    NodeHoverLeft {
        path: PathBuf,
    },
    RootLoaded {
        root: PathBuf,
        entries: Vec<DirectoryEntry>,
    },
    RootLoadFailed {
        root: PathBuf,
        message: String,
    },
    FolderLoaded {
        directory: PathBuf,
        entries: Vec<DirectoryEntry>,
    },
    FolderLoadFailed {
        directory: PathBuf,
        message: String,
    },
}

/// Effect events produced by the explorer reducer.
#[derive(Debug, Clone)]
pub(crate) enum ExplorerEffect {
    /// Ask the user for a new root folder.
    PickFolderRequested,
    /// List the root directory.
    LoadRootRequested { root: PathBuf },
    /// List a folder's children for the first time.
    LoadFolderRequested { directory: PathBuf },
    /// A file row was clicked.
    OpenFileRequested { path: PathBuf, name: String },
}
