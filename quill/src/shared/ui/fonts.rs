use iced::Font;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
        }
    }
}

/// Font used inside the text buffer.
#[derive(Debug, Clone)]
pub(crate) struct EditorFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for EditorFonts {
    fn default() -> Self {
        Self {
            font_type: Font::MONOSPACE,
            size: 14.0,
        }
    }
}

/// Combined font configuration for chrome and editor rendering.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) editor: EditorFonts,
}
