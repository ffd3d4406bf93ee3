use iced::Task;

use crate::app::{App, AppEvent, AppFlowEvent};
use crate::storage::EDITOR_CODE_KEY;

/// Store the current buffer and quit once the write settles.
pub(crate) fn persist_and_exit(app: &mut App) -> Task<AppEvent> {
    app.store.set(EDITOR_CODE_KEY, app.widgets.editor.text());
    let store = app.store.clone();

    Task::perform(async move { store.save() }, |result| {
        if let Err(err) = result {
            log::warn!("failed to persist editor buffer: {err}");
        }
        AppEvent::Flow(AppFlowEvent::Exit)
    })
}
