use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Explorer widget
        AppEvent::ExplorerUi(event) => {
            routers::explorer::route_event(app, event)
        },
        AppEvent::ExplorerEffect(effect) => {
            routers::explorer::route_effect(app, effect)
        },
        AppEvent::ExplorerCommand(command) => {
            routers::explorer::route_command(app, command)
        },
        // Editor widget
        AppEvent::EditorUi(event) => routers::editor::route_event(app, event),
        AppEvent::EditorEffect(effect) => {
            routers::editor::route_effect(app, effect)
        },
        AppEvent::EditorCommand(command) => {
            routers::editor::route_command(app, command)
        },
        // Chrome widget
        AppEvent::ChromeUi(event) => routers::chrome::route_event(app, event),
        AppEvent::ChromeEffect(effect) => {
            routers::chrome::route_effect(app, effect)
        },
        AppEvent::ChromeCommand(command) => {
            routers::chrome::route_command(app, command)
        },
        // Cross-widget flows
        AppEvent::Flow(flow) => routers::flow::route(app, flow),
        // Direct operations
        AppEvent::Keyboard(event) => routers::keyboard::route(event),
        AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(window::Event::CloseRequested) => {
            routers::window::handle_close_requested()
        },
        AppEvent::Window(_) => Task::none(),
        AppEvent::ResizeWindow(dir) => routers::window::handle_drag_resize(dir),
    }
}
