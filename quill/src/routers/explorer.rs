use std::path::PathBuf;

use iced::Task;
use quill_gateway::dialogs;

use crate::app::{App, AppEvent, AppFlowEvent};
use crate::widgets::explorer::{ExplorerCommand, ExplorerEffect, ExplorerEvent};

/// Route an explorer UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ExplorerEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route an explorer command directly (used by flow routers).
pub(crate) fn route_command(
    app: &mut App,
    command: ExplorerCommand,
) -> Task<AppEvent> {
    app.widgets
        .explorer
        .reduce(command)
        .map(AppEvent::ExplorerEffect)
}

/// Route an explorer effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ExplorerEffect,
) -> Task<AppEvent> {
    match effect {
        ExplorerEffect::PickFolderRequested => {
            Task::perform(dialogs::pick_folder(), |root| {
                AppEvent::ExplorerUi(ExplorerEvent::FolderPicked { root })
            })
        },
        ExplorerEffect::LoadRootRequested { root } => {
            load_directory_async(app, root, |root, result| match result {
                Ok(entries) => ExplorerEvent::RootLoaded { root, entries },
                Err(message) => ExplorerEvent::RootLoadFailed { root, message },
            })
        },
        ExplorerEffect::LoadFolderRequested { directory } => {
            load_directory_async(app, directory, |directory, result| {
                match result {
                    Ok(entries) => {
                        ExplorerEvent::FolderLoaded { directory, entries }
                    },
                    Err(message) => {
                        ExplorerEvent::FolderLoadFailed { directory, message }
                    },
                }
            })
        },
        ExplorerEffect::OpenFileRequested { path, name } => Task::done(
            AppEvent::Flow(AppFlowEvent::OpenFileFromTree { path, name }),
        ),
    }
}

/// List a directory off the update loop and produce a completion event.
fn load_directory_async<F>(
    app: &App,
    dir: PathBuf,
    on_complete: F,
) -> Task<AppEvent>
where
    F: FnOnce(
            PathBuf,
            Result<Vec<quill_gateway::DirectoryEntry>, String>,
        ) -> ExplorerEvent
        + Send
        + 'static,
{
    let fs = app.fs.clone();
    Task::perform(
        async move {
            let result = fs.list_directory(&dir).map_err(|err| err.message());
            (dir, result)
        },
        move |(dir, result)| AppEvent::ExplorerUi(on_complete(dir, result)),
    )
}

fn map_event_to_command(event: ExplorerEvent) -> ExplorerCommand {
    use {ExplorerCommand as C, ExplorerEvent as E};

    match event {
        E::OpenFolderPressed => C::OpenFolder,
        E::FolderPicked { root } => C::FolderPicked { root },
        E::NodePressed { path } => C::NodePressed { path },
        E::NodeHovered { path } => C::NodeHovered { path },
        E::NodeHoverLeft { path } => C::NodeHoverLeft { path },
        E::RootLoaded { root, entries } => C::RootLoaded { root, entries },
        E::RootLoadFailed { root, message } => {
            C::RootLoadFailed { root, message }
        },
        E::FolderLoaded { directory, entries } => {
            C::FolderLoaded { directory, entries }
        },
        E::FolderLoadFailed { directory, message } => {
            C::FolderLoadFailed { directory, message }
        },
    }
}
