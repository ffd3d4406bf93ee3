use std::time::Duration;

use iced::{Subscription, window};

use crate::app::{App, AppEvent};
use crate::widgets::editor::EditorCommand;

const STATUS_TICK_MS: u64 = 500;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Clock for reverting transient status messages.
    if app.widgets.editor.has_transient_status() {
        let tick = iced::time::every(Duration::from_millis(STATUS_TICK_MS))
            .map(|_| AppEvent::EditorCommand(EditorCommand::Tick));
        subs.push(tick);
    }

    Subscription::batch(subs)
}
