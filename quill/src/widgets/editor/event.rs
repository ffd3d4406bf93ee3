use std::path::PathBuf;

use iced::widget::text_editor;

/// UI and completion events handled by the editor.
#[derive(Debug, Clone)]
pub(crate) enum EditorEvent {
    ActionPerformed(text_editor::Action),
    AutosaveToggled,
    FilePicked {
        path: Option<PathBuf>,
    },
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileLoadFailed {
        path: PathBuf,
        error: String,
    },
    SaveLocationChosen {
        path: Option<PathBuf>,
    },
    WriteCompleted {
        path: PathBuf,
        revision: u64,
    },
    WriteFailed {
        path: PathBuf,
        error: String,
    },
    NewFileConfirmed {
        confirmed: bool,
    },
    FileSizeResolved {
        path: PathBuf,
        size: Option<u64>,
    },
    FindQueryChanged(String),
    ReplacementChanged(String),
    FindNextPressed,
    ReplacePressed,
    FindClosePressed,
}

/// Effect events produced by the editor reducer.
#[derive(Debug, Clone)]
pub(crate) enum EditorEffect {
    ReadFileRequested {
        path: PathBuf,
    },
    PickFileRequested,
    PickSaveLocationRequested {
        suggested_name: String,
    },
    WriteFileRequested {
        path: PathBuf,
        content: String,
        revision: u64,
    },
    ConfirmDiscardRequested,
    /// A file finished loading into the buffer.
    FileOpened {
        path: PathBuf,
    },
    FileSizeRequested {
        path: PathBuf,
    },
}
