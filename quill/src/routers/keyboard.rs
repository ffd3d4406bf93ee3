use iced::Task;
use iced::keyboard;

use crate::app::AppEvent;
use crate::shortcuts::{self, Shortcut};
use crate::widgets::chrome::ChromeCommand;
use crate::widgets::editor::EditorCommand;
use crate::widgets::editor::find::FindMode;

/// Translate global key presses into widget commands.
pub(crate) fn route(event: keyboard::Event) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };

    match shortcuts::resolve(&key, modifiers) {
        Some(shortcut) => shortcut_task(shortcut),
        None => Task::none(),
    }
}

fn shortcut_task(shortcut: Shortcut) -> Task<AppEvent> {
    let editor = |command| Task::done(AppEvent::EditorCommand(command));
    let chrome = |command| Task::done(AppEvent::ChromeCommand(command));

    match shortcut {
        Shortcut::Save => editor(EditorCommand::Save),
        Shortcut::OpenFile => editor(EditorCommand::OpenFromPicker),
        Shortcut::NewFile => editor(EditorCommand::NewFile),
        Shortcut::Find => editor(EditorCommand::OpenFind {
            mode: FindMode::Find,
        }),
        Shortcut::Replace => editor(EditorCommand::OpenFind {
            mode: FindMode::Replace,
        }),
        Shortcut::ToggleSidebar => chrome(ChromeCommand::ToggleSidebar),
        Shortcut::ToggleFullScreen => chrome(ChromeCommand::ToggleFullScreen),
        Shortcut::Dismiss => Task::batch([
            chrome(ChromeCommand::ExitFullScreen),
            editor(EditorCommand::CloseFind),
        ]),
    }
}
