use iced::{Task, window};

use crate::app::{App, AppEvent, AppFlowEvent};
use crate::widgets::chrome::{ChromeCommand, ChromeEffect, ChromeEvent};

/// Route a chrome UI event through the widget reducer and map effects.
pub(crate) fn route_event(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a chrome command directly (used by keyboard shortcuts).
pub(crate) fn route_command(
    app: &mut App,
    command: ChromeCommand,
) -> Task<AppEvent> {
    app.widgets
        .chrome
        .reduce(command)
        .map(AppEvent::ChromeEffect)
}

/// Route a chrome effect event to an app-level task.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ChromeEffect,
) -> Task<AppEvent> {
    match effect {
        ChromeEffect::WindowModeChanged { mode } => {
            window::latest().and_then(move |id| window::set_mode(id, mode))
        },
        ChromeEffect::MaximizeToggled { maximized } => {
            window::latest().and_then(move |id| window::maximize(id, maximized))
        },
        ChromeEffect::MinimizeWindow => {
            window::latest().and_then(|id| window::minimize(id, true))
        },
        ChromeEffect::CloseRequested => {
            Task::done(AppEvent::Flow(AppFlowEvent::PersistAndExit))
        },
        ChromeEffect::ToggleSidebar => {
            app.state.toggle_sidebar();
            Task::none()
        },
        ChromeEffect::StartWindowDrag => {
            window::latest().and_then(window::drag)
        },
    }
}

fn map_event_to_command(event: ChromeEvent) -> ChromeCommand {
    match event {
        ChromeEvent::MinimizePressed => ChromeCommand::Minimize,
        ChromeEvent::MaximizePressed
        | ChromeEvent::TitleBarDoubleClicked => ChromeCommand::ToggleMaximize,
        ChromeEvent::ClosePressed => ChromeCommand::Close,
        ChromeEvent::SidebarTogglePressed => ChromeCommand::ToggleSidebar,
        ChromeEvent::TitleBarPressed => ChromeCommand::StartWindowDrag,
    }
}
