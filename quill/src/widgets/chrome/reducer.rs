use iced::{Task, window};

use super::command::ChromeCommand;
use super::event::ChromeEffect;
use super::state::ChromeState;

/// Reduce a chrome command into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut ChromeState,
    command: ChromeCommand,
) -> Task<ChromeEffect> {
    match command {
        ChromeCommand::ToggleFullScreen => {
            let mode = if state.toggle_fullscreen() {
                window::Mode::Fullscreen
            } else {
                window::Mode::Windowed
            };
            Task::done(ChromeEffect::WindowModeChanged { mode })
        },
        ChromeCommand::ExitFullScreen => {
            if state.exit_fullscreen() {
                Task::done(ChromeEffect::WindowModeChanged {
                    mode: window::Mode::Windowed,
                })
            } else {
                Task::none()
            }
        },
        ChromeCommand::ToggleMaximize => {
            let maximized = state.toggle_maximized();
            Task::done(ChromeEffect::MaximizeToggled { maximized })
        },
        ChromeCommand::Minimize => Task::done(ChromeEffect::MinimizeWindow),
        ChromeCommand::Close => Task::done(ChromeEffect::CloseRequested),
        ChromeCommand::ToggleSidebar => Task::done(ChromeEffect::ToggleSidebar),
        ChromeCommand::StartWindowDrag => {
            Task::done(ChromeEffect::StartWindowDrag)
        },
    }
}
