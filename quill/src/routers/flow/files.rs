use std::path::PathBuf;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::editor::EditorCommand;
use crate::widgets::explorer::ExplorerCommand;

/// Explorer asked to open a file: hand it to the editor.
pub(crate) fn open_from_tree(
    app: &mut App,
    path: PathBuf,
    name: String,
) -> Task<AppEvent> {
    routers::editor::route_command(
        app,
        EditorCommand::OpenFromTree { path, name },
    )
}

/// Editor loaded a file: highlight it in the tree.
pub(crate) fn mark_opened(app: &mut App, path: PathBuf) -> Task<AppEvent> {
    routers::explorer::route_command(app, ExplorerCommand::MarkActive { path })
}
