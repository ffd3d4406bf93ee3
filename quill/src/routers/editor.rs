use std::time::Instant;

use iced::Task;
use quill_gateway::{ReadOutcome, WriteOutcome, dialogs};

use crate::app::{App, AppEvent, AppFlowEvent};
use crate::widgets::editor::{
    EditorCommand, EditorCtx, EditorEffect, EditorEvent,
};

/// Route an editor UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: EditorEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route an editor command directly (used by flow routers and shortcuts).
pub(crate) fn route_command(
    app: &mut App,
    command: EditorCommand,
) -> Task<AppEvent> {
    let ctx = EditorCtx {
        now: Instant::now(),
    };
    app.widgets
        .editor
        .reduce(command, &ctx)
        .map(AppEvent::EditorEffect)
}

/// Route an editor effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: EditorEffect,
) -> Task<AppEvent> {
    match effect {
        EditorEffect::ReadFileRequested { path } => {
            let fs = app.fs.clone();
            Task::perform(
                async move {
                    let outcome = ReadOutcome::from(fs.read_file(&path));
                    (path, outcome)
                },
                |(path, outcome)| {
                    AppEvent::EditorUi(match outcome {
                        ReadOutcome::Ok { content } => {
                            EditorEvent::FileLoaded { path, content }
                        },
                        ReadOutcome::Failed { error } => {
                            EditorEvent::FileLoadFailed { path, error }
                        },
                    })
                },
            )
        },
        EditorEffect::PickFileRequested => Task::perform(
            dialogs::pick_file(dialogs::OPEN_FILE_FILTERS),
            |path| AppEvent::EditorUi(EditorEvent::FilePicked { path }),
        ),
        EditorEffect::PickSaveLocationRequested { suggested_name } => {
            Task::perform(dialogs::pick_save_location(suggested_name), |path| {
                AppEvent::EditorUi(EditorEvent::SaveLocationChosen { path })
            })
        },
        EditorEffect::WriteFileRequested {
            path,
            content,
            revision,
        } => {
            let fs = app.fs.clone();
            Task::perform(
                async move {
                    let outcome =
                        WriteOutcome::from(fs.write_file(&path, &content));
                    (path, outcome)
                },
                move |(path, outcome)| {
                    AppEvent::EditorUi(match outcome {
                        WriteOutcome::Ok => {
                            EditorEvent::WriteCompleted { path, revision }
                        },
                        WriteOutcome::Failed { error } => {
                            EditorEvent::WriteFailed { path, error }
                        },
                    })
                },
            )
        },
        EditorEffect::ConfirmDiscardRequested => {
            Task::perform(dialogs::confirm_discard(), |confirmed| {
                AppEvent::EditorUi(EditorEvent::NewFileConfirmed { confirmed })
            })
        },
        EditorEffect::FileOpened { path } => {
            Task::done(AppEvent::Flow(AppFlowEvent::FileOpened { path }))
        },
        EditorEffect::FileSizeRequested { path } => {
            let fs = app.fs.clone();
            Task::perform(
                async move {
                    let size = match fs.file_size(&path) {
                        Ok(size) => Some(size),
                        Err(err) => {
                            log::debug!("file size unavailable: {err}");
                            None
                        },
                    };
                    (path, size)
                },
                |(path, size)| {
                    AppEvent::EditorUi(EditorEvent::FileSizeResolved {
                        path,
                        size,
                    })
                },
            )
        },
    }
}

fn map_event_to_command(event: EditorEvent) -> EditorCommand {
    use {EditorCommand as C, EditorEvent as E};

    match event {
        E::ActionPerformed(action) => C::Action(action),
        E::AutosaveToggled => C::ToggleAutosave,
        E::FilePicked { path } => C::FilePicked { path },
        E::FileLoaded { path, content } => C::FileLoaded { path, content },
        E::FileLoadFailed { path, error } => C::FileLoadFailed { path, error },
        E::SaveLocationChosen { path } => C::SaveLocationChosen { path },
        E::WriteCompleted { path, revision } => {
            C::WriteCompleted { path, revision }
        },
        E::WriteFailed { path, error } => C::WriteFailed { path, error },
        E::NewFileConfirmed { confirmed } => C::NewFileConfirmed { confirmed },
        E::FileSizeResolved { path, size } => {
            C::FileSizeResolved { path, size }
        },
        E::FindQueryChanged(query) => C::SetFindQuery { query },
        E::ReplacementChanged(replacement) => C::SetReplacement { replacement },
        E::FindNextPressed => C::FindNext,
        E::ReplacePressed => C::ReplaceCurrent,
        E::FindClosePressed => C::CloseFind,
    }
}
