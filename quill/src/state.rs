use iced::Size;

/// Preferred width of the explorer panel.
pub(crate) const SIDEBAR_WIDTH: f32 = 250.0;
/// The explorer never takes more than this share of the window.
const SIDEBAR_MAX_RATIO: f32 = 0.5;

/// Window geometry and layout state.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    sidebar_hidden: bool,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            sidebar_hidden: false,
        }
    }

    pub(crate) fn is_sidebar_hidden(&self) -> bool {
        self.sidebar_hidden
    }

    pub(crate) fn toggle_sidebar(&mut self) {
        self.sidebar_hidden = !self.sidebar_hidden;
    }

    /// Width of the explorer panel for the current window.
    pub(crate) fn sidebar_width(&self) -> f32 {
        if self.sidebar_hidden {
            return 0.0;
        }
        SIDEBAR_WIDTH.min(self.window_size.width * SIDEBAR_MAX_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::{SIDEBAR_WIDTH, State};

    #[test]
    fn given_hidden_sidebar_when_measured_then_it_takes_no_width() {
        let mut state = State::new(Size::new(1000.0, 700.0));
        assert_eq!(state.sidebar_width(), SIDEBAR_WIDTH);

        state.toggle_sidebar();

        assert!(state.is_sidebar_hidden());
        assert_eq!(state.sidebar_width(), 0.0);
    }

    #[test]
    fn given_narrow_window_when_measured_then_sidebar_is_capped() {
        let state = State::new(Size::new(300.0, 700.0));

        assert_eq!(state.sidebar_width(), 150.0);
    }
}
