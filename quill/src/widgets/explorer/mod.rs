mod command;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::ExplorerCommand;
pub(crate) use event::{ExplorerEffect, ExplorerEvent};
use iced::Task;
use state::ExplorerState;

/// Explorer widget: owns the lazily loaded folder tree, its expansion
/// set, and the active and hovered rows.
pub(crate) struct ExplorerWidget {
    state: ExplorerState,
}

impl ExplorerWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: ExplorerState::default(),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ExplorerCommand,
    ) -> Task<ExplorerEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return a flattened view model for the sidebar tree.
    pub(crate) fn tree_vm(&self) -> model::ExplorerTreeViewModel<'_> {
        model::ExplorerTreeViewModel {
            root_label: self.state.root_label(),
            rows: self.state.visible_rows(),
            placeholder: self.state.root_status().placeholder(),
        }
    }
}

impl Default for ExplorerWidget {
    fn default() -> Self {
        Self::new()
    }
}
