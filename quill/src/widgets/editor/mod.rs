mod command;
pub(crate) mod event;
pub(crate) mod find;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod syntax;
pub(crate) mod view;

use std::time::Instant;

pub(crate) use command::EditorCommand;
pub(crate) use event::{EditorEffect, EditorEvent};
use iced::Task;
pub(crate) use reducer::EditorCtx;
use state::EditorState;

/// Editor widget: owns the text buffer and the session record (file
/// name, path, modified flag, autosave).
pub(crate) struct EditorWidget {
    state: EditorState,
}

impl EditorWidget {
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            state: EditorState::new(now),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: EditorCommand,
        ctx: &EditorCtx,
    ) -> Task<EditorEffect> {
        reducer::reduce(&mut self.state, command, ctx)
    }

    /// Current buffer text.
    pub(crate) fn text(&self) -> String {
        self.state.text()
    }

    /// File name with the unsaved-changes marker.
    pub(crate) fn display_name(&self) -> String {
        let session = self.state.session();
        model::display_name(session.file_name.as_deref(), session.is_modified)
    }

    /// Whether the status line needs the clock to expire a message.
    pub(crate) fn has_transient_status(&self) -> bool {
        self.state.has_transient_status()
    }

    pub(crate) fn pane_vm(&self) -> model::EditorPaneViewModel<'_> {
        model::EditorPaneViewModel {
            content: self.state.content(),
            highlight_token: self.state.syntax().highlight_token(),
        }
    }

    pub(crate) fn find_bar_vm(&self) -> Option<model::FindBarViewModel<'_>> {
        let find = self.state.find();
        let mode = find.mode()?;
        Some(model::FindBarViewModel {
            show_replace: mode == find::FindMode::Replace,
            query: find.query(),
            replacement: find.replacement(),
            input_id: find.input_id(),
        })
    }

    pub(crate) fn status_vm(&self) -> model::StatusBarViewModel<'_> {
        let (line, column) = self.state.cursor_line_column();
        model::StatusBarViewModel {
            line,
            column,
            line_count: self.state.line_count(),
            file_size: self.state.file_size().map(model::format_file_size),
            message: self.state.status().text(),
            mode_name: self.state.syntax().mode_name(),
            autosave_enabled: self.state.autosave_enabled(),
        }
    }
}
