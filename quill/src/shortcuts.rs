use iced::keyboard::{Key, Modifiers, key};

/// Application-level keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shortcut {
    Save,
    OpenFile,
    NewFile,
    ToggleSidebar,
    Find,
    Replace,
    ToggleFullScreen,
    /// Esc: leave full screen and close the find bar.
    Dismiss,
}

/// Map a key press to a shortcut. Letter shortcuts accept either Ctrl or
/// the platform command key.
pub(crate) fn resolve(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    match key.as_ref() {
        Key::Named(key::Named::F11) => Some(Shortcut::ToggleFullScreen),
        Key::Named(key::Named::Escape) => Some(Shortcut::Dismiss),
        Key::Character(c) if modifiers.command() || modifiers.control() => {
            match c.to_ascii_lowercase().as_str() {
                "s" => Some(Shortcut::Save),
                "o" => Some(Shortcut::OpenFile),
                "n" => Some(Shortcut::NewFile),
                "b" => Some(Shortcut::ToggleSidebar),
                "f" => Some(Shortcut::Find),
                "h" => Some(Shortcut::Replace),
                _ => None,
            }
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::{Key, Modifiers, key};

    use super::{Shortcut, resolve};

    fn character(value: &str) -> Key {
        Key::Character(value.into())
    }

    #[test]
    fn given_ctrl_letters_when_resolved_then_file_shortcuts_match() {
        assert_eq!(
            resolve(&character("s"), Modifiers::CTRL),
            Some(Shortcut::Save)
        );
        assert_eq!(
            resolve(&character("O"), Modifiers::CTRL | Modifiers::SHIFT),
            Some(Shortcut::OpenFile)
        );
        assert_eq!(
            resolve(&character("n"), Modifiers::LOGO | Modifiers::CTRL),
            Some(Shortcut::NewFile)
        );
        assert_eq!(
            resolve(&character("b"), Modifiers::CTRL),
            Some(Shortcut::ToggleSidebar)
        );
    }

    #[test]
    fn given_plain_letter_when_resolved_then_no_shortcut_fires() {
        assert_eq!(resolve(&character("s"), Modifiers::empty()), None);
        assert_eq!(resolve(&character("q"), Modifiers::CTRL), None);
    }

    #[test]
    fn given_function_keys_when_resolved_then_fullscreen_shortcuts_match() {
        assert_eq!(
            resolve(&Key::Named(key::Named::F11), Modifiers::empty()),
            Some(Shortcut::ToggleFullScreen)
        );
        assert_eq!(
            resolve(&Key::Named(key::Named::Escape), Modifiers::empty()),
            Some(Shortcut::Dismiss)
        );
    }

    #[test]
    fn given_ctrl_or_cmd_f_and_h_when_resolved_then_search_shortcuts_match() {
        assert_eq!(
            resolve(&character("f"), Modifiers::CTRL),
            Some(Shortcut::Find)
        );
        assert_eq!(
            resolve(&character("f"), Modifiers::LOGO),
            Some(Shortcut::Find)
        );
        assert_eq!(
            resolve(&character("H"), Modifiers::CTRL),
            Some(Shortcut::Replace)
        );
        assert_eq!(resolve(&character("f"), Modifiers::SHIFT), None);
    }
}
