pub(crate) mod files;
pub(crate) mod session;

use iced::Task;

use crate::app::{App, AppEvent, AppFlowEvent};

/// Route a flow event to the appropriate cross-widget orchestrator.
pub(crate) fn route(app: &mut App, event: AppFlowEvent) -> Task<AppEvent> {
    match event {
        AppFlowEvent::OpenFileFromTree { path, name } => {
            files::open_from_tree(app, path, name)
        },
        AppFlowEvent::FileOpened { path } => files::mark_opened(app, path),
        AppFlowEvent::PersistAndExit => session::persist_and_exit(app),
        AppFlowEvent::Exit => iced::exit(),
    }
}
