mod command;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::ChromeCommand;
pub(crate) use event::{ChromeEffect, ChromeEvent};
use iced::Task;
use model::ChromeViewModel;
use quill_gateway::HostPlatform;
use state::ChromeState;

/// Chrome widget managing the undecorated window's controls.
pub(crate) struct ChromeWidget {
    state: ChromeState,
}

impl ChromeWidget {
    pub(crate) fn new(platform: HostPlatform) -> Self {
        Self {
            state: ChromeState::new(platform),
        }
    }

    /// Reduce a chrome command into state updates and effects.
    pub(crate) fn reduce(&mut self, command: ChromeCommand) -> Task<ChromeEffect> {
        reducer::reduce(&mut self.state, command)
    }

    pub(crate) fn vm(&self) -> ChromeViewModel {
        ChromeViewModel {
            is_fullscreen: self.state.is_fullscreen(),
            is_maximized: self.state.is_maximized(),
            controls_leading: self.state.platform().leading_window_controls(),
        }
    }
}
