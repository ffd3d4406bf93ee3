use std::path::PathBuf;
use std::time::Instant;

use std::sync::Arc;

use iced::Task;
use iced::widget::operation;
use iced::widget::text_editor::{Action, Edit};

use super::command::EditorCommand;
use super::event::EditorEffect;
use super::find::{FindMode, matched_text};
use super::model::{NEW_FILE_TEXT, UNTITLED_FILE_NAME};
use super::state::{EditorState, PendingOpen, file_name_of};

/// Runtime context passed into the editor reducer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EditorCtx {
    pub(crate) now: Instant,
}

/// Reduce an editor command into state updates and effects.
pub(crate) fn reduce(
    state: &mut EditorState,
    command: EditorCommand,
    ctx: &EditorCtx,
) -> Task<EditorEffect> {
    use EditorCommand as C;

    match command {
        C::OpenFromTree { path, name } => request_open(state, path, name),
        C::OpenFromPicker => Task::done(EditorEffect::PickFileRequested),
        C::FilePicked { path: Some(path) } => {
            let name = file_name_of(&path);
            request_open(state, path, name)
        },
        C::FilePicked { path: None } => Task::none(),
        C::FileLoaded { path, content } => {
            reduce_file_loaded(state, path, content, ctx)
        },
        C::FileLoadFailed { path, error } => {
            if state.take_pending_open(&path).is_none() {
                log::debug!("editor ignored stale read failure");
                return Task::none();
            }
            state.set_status(format!("Error opening file: {error}"), ctx.now);
            Task::none()
        },
        C::Save => reduce_save(state),
        C::SaveLocationChosen { path } => {
            reduce_save_location_chosen(state, path, ctx)
        },
        C::WriteCompleted { path, revision } => {
            state.complete_save(&path, revision, ctx.now);
            state.set_status("File saved successfully", ctx.now);
            Task::done(EditorEffect::FileSizeRequested { path })
        },
        C::WriteFailed { path, error } => {
            log::warn!("editor failed to write {}: {error}", path.display());
            state.set_save_in_flight(false);
            state.set_status(format!("Error saving file: {error}"), ctx.now);
            Task::none()
        },
        C::Action(action) => reduce_action(state, action, ctx),
        C::ToggleAutosave => {
            let message = if state.toggle_autosave() {
                "Auto-save enabled"
            } else {
                "Auto-save disabled"
            };
            state.set_status(message, ctx.now);
            Task::none()
        },
        C::NewFile => {
            if state.text().is_empty() {
                reset_to_new_file(state, ctx);
                Task::none()
            } else {
                Task::done(EditorEffect::ConfirmDiscardRequested)
            }
        },
        C::NewFileConfirmed { confirmed } => {
            if confirmed {
                reset_to_new_file(state, ctx);
            }
            Task::none()
        },
        C::Restore { content } => {
            state.restore_text(&content);
            state.set_status("Recovered previous session", ctx.now);
            Task::none()
        },
        C::Tick => {
            let _ = state.expire_status(ctx.now);
            Task::none()
        },
        C::FileSizeResolved { path, size } => {
            state.set_file_size(&path, size);
            Task::none()
        },
        C::OpenFind { mode } => {
            state.find_mut().open(mode);
            operation::focus(state.find().input_id().clone())
        },
        C::CloseFind => {
            state.find_mut().close();
            Task::none()
        },
        C::SetFindQuery { query } => {
            state.find_mut().set_query(query);
            Task::none()
        },
        C::SetReplacement { replacement } => {
            state.find_mut().set_replacement(replacement);
            Task::none()
        },
        C::FindNext => {
            find_next(state, ctx);
            Task::none()
        },
        C::ReplaceCurrent => reduce_replace_current(state, ctx),
    }
}

fn request_open(
    state: &mut EditorState,
    path: PathBuf,
    name: String,
) -> Task<EditorEffect> {
    state.set_pending_open(Some(PendingOpen {
        path: path.clone(),
        name,
    }));
    Task::done(EditorEffect::ReadFileRequested { path })
}

fn reduce_file_loaded(
    state: &mut EditorState,
    path: PathBuf,
    content: String,
    ctx: &EditorCtx,
) -> Task<EditorEffect> {
    let Some(pending) = state.take_pending_open(&path) else {
        log::debug!("editor ignored stale read of {}", path.display());
        return Task::none();
    };

    state.set_status(format!("Opened {}", pending.name), ctx.now);
    state.load(&content, pending.name, Some(path.clone()));

    Task::batch([
        Task::done(EditorEffect::FileOpened { path: path.clone() }),
        Task::done(EditorEffect::FileSizeRequested { path }),
    ])
}

fn reduce_save(state: &mut EditorState) -> Task<EditorEffect> {
    if state.save_in_flight() {
        log::debug!("editor save skipped, another save is in flight");
        return Task::none();
    }

    state.set_save_in_flight(true);
    match state.session().file_path.clone() {
        Some(path) => write_request(state, path),
        None => {
            let suggested_name = state
                .session()
                .file_name
                .clone()
                .unwrap_or_else(|| String::from(UNTITLED_FILE_NAME));
            Task::done(EditorEffect::PickSaveLocationRequested {
                suggested_name,
            })
        },
    }
}

fn reduce_save_location_chosen(
    state: &mut EditorState,
    path: Option<PathBuf>,
    ctx: &EditorCtx,
) -> Task<EditorEffect> {
    let Some(path) = path else {
        state.set_save_in_flight(false);
        return Task::none();
    };

    state.adopt_path(path.clone());
    state.set_status(format!("Saving {}", file_name_of(&path)), ctx.now);
    write_request(state, path)
}

fn reduce_action(
    state: &mut EditorState,
    action: Action,
    ctx: &EditorCtx,
) -> Task<EditorEffect> {
    let is_edit = action.is_edit();
    state.perform(action);

    if !is_edit {
        return Task::none();
    }

    state.mark_edited();
    autosave_if_due(state, ctx)
}

fn autosave_if_due(
    state: &mut EditorState,
    ctx: &EditorCtx,
) -> Task<EditorEffect> {
    if !state.autosave_due(ctx.now) {
        return Task::none();
    }

    match state.session().file_path.clone() {
        Some(path) => {
            log::debug!("editor autosaving {}", path.display());
            state.set_save_in_flight(true);
            write_request(state, path)
        },
        None => Task::none(),
    }
}

fn find_next(state: &mut EditorState, ctx: &EditorCtx) {
    if state.find().query().is_empty() {
        return;
    }

    let text = state.text();
    match state.find_mut().advance(&text) {
        Some(found) => state.select_match(found),
        None => {
            let message =
                format!("No matches for \"{}\"", state.find().query());
            state.set_status(message, ctx.now);
        },
    }
}

/// The selected hit is replaced only while the selection still holds the
/// text that was matched; otherwise this acts as find-next.
fn reduce_replace_current(
    state: &mut EditorState,
    ctx: &EditorCtx,
) -> Task<EditorEffect> {
    if state.find().mode() != Some(FindMode::Replace) {
        return Task::none();
    }

    let text = state.text();
    let selection = state.selection();
    let current = state.find().current().filter(|found| {
        selection.as_deref() == Some(matched_text(&text, *found).as_str())
    });
    let Some(found) = current else {
        find_next(state, ctx);
        return Task::none();
    };

    let replacement = state.find().replacement().to_string();
    let inserted = replacement.chars().count();
    let edit = if replacement.is_empty() {
        Edit::Delete
    } else {
        Edit::Paste(Arc::new(replacement))
    };
    state.perform(Action::Edit(edit));
    state.mark_edited();
    state.find_mut().resume_after(found.start, inserted);
    find_next(state, ctx);

    autosave_if_due(state, ctx)
}

fn write_request(state: &EditorState, path: PathBuf) -> Task<EditorEffect> {
    Task::done(EditorEffect::WriteFileRequested {
        path,
        content: state.text(),
        revision: state.revision(),
    })
}

fn reset_to_new_file(state: &mut EditorState, ctx: &EditorCtx) {
    state.set_pending_open(None);
    state.load(NEW_FILE_TEXT, String::from(UNTITLED_FILE_NAME), None);
    state.set_status("New file created", ctx.now);
}
