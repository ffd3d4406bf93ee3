use std::path::{Path, PathBuf};
use std::time::Instant;

use iced::widget::text_editor::{self, Action, Motion};

use super::find::{FindMatch, FindState};
use super::model::{
    AUTOSAVE_THRESHOLD, IDLE_STATUS, STATUS_LIFETIME, UNTITLED_FILE_NAME,
    WELCOME_TEXT,
};
use super::syntax::SyntaxMode;

/// What is currently open and whether it has unsaved changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Session {
    pub(crate) file_name: Option<String>,
    pub(crate) file_path: Option<PathBuf>,
    pub(crate) is_modified: bool,
}

/// A file read that has been requested but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingOpen {
    pub(crate) path: PathBuf,
    pub(crate) name: String,
}

/// Transient status line text.
#[derive(Debug, Clone)]
pub(crate) struct StatusMessage {
    text: String,
    expires_at: Option<Instant>,
}

impl StatusMessage {
    fn idle() -> Self {
        Self {
            text: String::from(IDLE_STATUS),
            expires_at: None,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}

/// Buffer plus session bookkeeping owned by the editor widget.
pub(crate) struct EditorState {
    content: text_editor::Content,
    session: Session,
    syntax: SyntaxMode,
    /// Bumped on every buffer mutation; a write only clears the modified
    /// flag when no edit happened since it was issued.
    revision: u64,
    autosave_enabled: bool,
    last_save_at: Instant,
    save_in_flight: bool,
    pending_open: Option<PendingOpen>,
    file_size: Option<u64>,
    status: StatusMessage,
    find: FindState,
}

impl EditorState {
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            content: text_editor::Content::with_text(WELCOME_TEXT),
            session: Session {
                file_name: Some(String::from(UNTITLED_FILE_NAME)),
                file_path: None,
                is_modified: false,
            },
            syntax: SyntaxMode::JavaScript,
            revision: 0,
            autosave_enabled: false,
            last_save_at: now,
            save_in_flight: false,
            pending_open: None,
            file_size: None,
            status: StatusMessage::idle(),
            find: FindState::default(),
        }
    }

    pub(crate) fn content(&self) -> &text_editor::Content {
        &self.content
    }

    pub(crate) fn text(&self) -> String {
        self.content.text()
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn syntax(&self) -> SyntaxMode {
        self.syntax
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn autosave_enabled(&self) -> bool {
        self.autosave_enabled
    }

    pub(crate) fn save_in_flight(&self) -> bool {
        self.save_in_flight
    }

    #[cfg(test)]
    pub(crate) fn pending_open(&self) -> Option<&PendingOpen> {
        self.pending_open.as_ref()
    }

    pub(crate) fn file_size(&self) -> Option<u64> {
        self.file_size
    }

    pub(crate) fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub(crate) fn find(&self) -> &FindState {
        &self.find
    }

    pub(super) fn find_mut(&mut self) -> &mut FindState {
        &mut self.find
    }

    /// Currently selected buffer text, if any.
    pub(crate) fn selection(&self) -> Option<String> {
        self.content.selection()
    }

    /// Whether a transient status message still waits to expire.
    pub(crate) fn has_transient_status(&self) -> bool {
        self.status.expires_at.is_some()
    }

    /// One-based cursor line and column.
    pub(crate) fn cursor_line_column(&self) -> (usize, usize) {
        let position = self.content.cursor().position;
        (position.line + 1, position.column + 1)
    }

    pub(crate) fn line_count(&self) -> usize {
        self.content.line_count()
    }

    /// Autosave gate: enabled, a known path, no write in flight and the
    /// last save older than the threshold.
    pub(crate) fn autosave_due(&self, now: Instant) -> bool {
        self.autosave_enabled
            && self.session.file_path.is_some()
            && !self.save_in_flight
            && now.saturating_duration_since(self.last_save_at)
                > AUTOSAVE_THRESHOLD
    }

    pub(super) fn perform(&mut self, action: Action) {
        self.content.perform(action);
    }

    /// Select a search hit by stepping the cursor from the top of the
    /// buffer; one step per character, line endings included.
    pub(super) fn select_match(&mut self, found: FindMatch) {
        self.content.perform(Action::Move(Motion::DocumentStart));
        for _ in 0..found.start {
            self.content.perform(Action::Move(Motion::Right));
        }
        for _ in 0..found.len {
            self.content.perform(Action::Select(Motion::Right));
        }
    }

    pub(super) fn mark_edited(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.session.is_modified = true;
    }

    /// Replace the whole buffer with `text` for `name` at `path`.
    pub(super) fn load(
        &mut self,
        text: &str,
        name: String,
        path: Option<PathBuf>,
    ) {
        self.content = text_editor::Content::with_text(text);
        self.syntax = SyntaxMode::from_file_name(&name);
        self.session = Session {
            file_name: Some(name),
            file_path: path,
            is_modified: false,
        };
        self.revision = self.revision.wrapping_add(1);
        self.file_size = None;
        self.find.resume_after(0, 0);
    }

    /// Replace the buffer text but keep the current name and path.
    pub(super) fn restore_text(&mut self, text: &str) {
        self.content = text_editor::Content::with_text(text);
        self.session.is_modified = false;
        self.revision = self.revision.wrapping_add(1);
        self.find.resume_after(0, 0);
    }

    /// Adopt a new save location and re-derive the syntax mode.
    pub(super) fn adopt_path(&mut self, path: PathBuf) {
        let name = file_name_of(&path);
        self.syntax = SyntaxMode::from_file_name(&name);
        self.session.file_name = Some(name);
        self.session.file_path = Some(path);
    }

    pub(super) fn set_pending_open(&mut self, pending: Option<PendingOpen>) {
        self.pending_open = pending;
    }

    /// Take the pending open if it targets `path`.
    pub(super) fn take_pending_open(
        &mut self,
        path: &Path,
    ) -> Option<PendingOpen> {
        match &self.pending_open {
            Some(pending) if pending.path == path => self.pending_open.take(),
            _ => None,
        }
    }

    pub(super) fn set_save_in_flight(&mut self, in_flight: bool) {
        self.save_in_flight = in_flight;
    }

    /// Record a finished write; the modified flag clears only when the
    /// buffer still holds what was written.
    pub(super) fn complete_save(
        &mut self,
        path: &Path,
        revision: u64,
        now: Instant,
    ) {
        self.save_in_flight = false;
        self.last_save_at = now;
        if self.session.file_path.as_deref() == Some(path)
            && self.revision == revision
        {
            self.session.is_modified = false;
        }
    }

    pub(super) fn toggle_autosave(&mut self) -> bool {
        self.autosave_enabled = !self.autosave_enabled;
        self.autosave_enabled
    }

    pub(super) fn set_file_size(&mut self, path: &Path, size: Option<u64>) {
        if self.session.file_path.as_deref() == Some(path) {
            self.file_size = size;
        }
    }

    pub(super) fn set_status(&mut self, text: impl Into<String>, now: Instant) {
        self.status = StatusMessage {
            text: text.into(),
            expires_at: Some(now + STATUS_LIFETIME),
        };
    }

    /// Revert an expired status message to idle.
    pub(super) fn expire_status(&mut self, now: Instant) -> bool {
        match self.status.expires_at {
            Some(expires_at) if expires_at <= now => {
                self.status = StatusMessage::idle();
                true
            },
            _ => false,
        }
    }
}

/// Final path component as display text.
pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::{Duration, Instant};

    use super::EditorState;

    #[test]
    fn given_fresh_state_when_created_then_welcome_buffer_is_clean() {
        let state = EditorState::new(Instant::now());

        assert_eq!(state.session().file_name.as_deref(), Some("untitled.js"));
        assert!(!state.session().is_modified);
        assert!(state.text().contains("Welcome to Quill"));
        assert_eq!(state.status().text(), "Ready");
    }

    #[test]
    fn given_autosave_without_path_when_checked_then_it_is_not_due() {
        let start = Instant::now();
        let mut state = EditorState::new(start);
        let _ = state.toggle_autosave();

        assert!(!state.autosave_due(start + Duration::from_secs(60)));
    }

    #[test]
    fn given_autosave_with_path_when_threshold_elapses_then_it_becomes_due() {
        let start = Instant::now();
        let mut state = EditorState::new(start);
        let _ = state.toggle_autosave();
        state.adopt_path(PathBuf::from("/work/app.js"));

        assert!(!state.autosave_due(start + Duration::from_secs(30)));
        assert!(state.autosave_due(start + Duration::from_secs(31)));

        state.set_save_in_flight(true);
        assert!(!state.autosave_due(start + Duration::from_secs(31)));
    }

    #[test]
    fn given_edit_during_write_when_write_completes_then_buffer_stays_modified()
    {
        let start = Instant::now();
        let mut state = EditorState::new(start);
        state.adopt_path(PathBuf::from("/work/app.js"));
        state.mark_edited();
        let written = state.revision();
        state.set_save_in_flight(true);

        state.mark_edited();
        state.complete_save(Path::new("/work/app.js"), written, start);

        assert!(state.session().is_modified);
        assert!(!state.save_in_flight());
    }

    #[test]
    fn given_status_message_when_lifetime_passes_then_it_reverts_to_ready() {
        let start = Instant::now();
        let mut state = EditorState::new(start);
        state.set_status("File saved", start);

        assert!(!state.expire_status(start + Duration::from_secs(1)));
        assert_eq!(state.status().text(), "File saved");
        assert!(state.expire_status(start + Duration::from_secs(3)));
        assert_eq!(state.status().text(), "Ready");
        assert!(!state.has_transient_status());
    }
}
