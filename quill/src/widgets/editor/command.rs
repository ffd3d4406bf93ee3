use std::path::PathBuf;

use iced::widget::text_editor;

use super::find::FindMode;

/// Internal commands dispatched to the editor reducer.
#[derive(Debug, Clone)]
pub(crate) enum EditorCommand {
    /// A file row in the explorer was clicked.
    OpenFromTree { path: PathBuf, name: String },
    /// Ask for a file through the native picker.
    OpenFromPicker,
    /// The file picker closed; `None` when cancelled.
    FilePicked { path: Option<PathBuf> },
    FileLoaded { path: PathBuf, content: String },
    FileLoadFailed { path: PathBuf, error: String },
    Save,
    /// The save dialog closed; `None` when cancelled.
    SaveLocationChosen { path: Option<PathBuf> },
    WriteCompleted { path: PathBuf, revision: u64 },
    WriteFailed { path: PathBuf, error: String },
    /// Text widget interaction (cursor move, selection, edit).
    Action(text_editor::Action),
    ToggleAutosave,
    NewFile,
    NewFileConfirmed { confirmed: bool },
    /// Restore buffer text persisted by a previous session.
    Restore { content: String },
    /// Periodic clock used to expire status messages.
    Tick,
    FileSizeResolved { path: PathBuf, size: Option<u64> },
    /// Show the find bar, with replace controls for [`FindMode::Replace`].
    OpenFind { mode: FindMode },
    CloseFind,
    SetFindQuery { query: String },
    SetReplacement { replacement: String },
    FindNext,
    /// Replace the selected hit, then move to the next one.
    ReplaceCurrent,
}
