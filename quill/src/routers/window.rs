use iced::{Task, window};

use crate::app::{App, AppEvent, AppFlowEvent};

/// Track the window size for layout decisions.
pub(crate) fn handle_resize(app: &mut App, size: iced::Size) -> Task<AppEvent> {
    app.state.window_size = size;
    Task::none()
}

/// The OS asked to close the window; persist before quitting.
pub(crate) fn handle_close_requested() -> Task<AppEvent> {
    Task::done(AppEvent::Flow(AppFlowEvent::PersistAndExit))
}

/// Handle window drag-resize from resize grips.
pub(crate) fn handle_drag_resize(dir: window::Direction) -> Task<AppEvent> {
    window::latest().and_then(move |id| window::drag_resize(id, dir))
}
