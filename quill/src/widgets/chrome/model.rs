/// View model for the chrome widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeViewModel {
    pub(crate) is_fullscreen: bool,
    pub(crate) is_maximized: bool,
    /// Window controls sit before the title (macOS style).
    pub(crate) controls_leading: bool,
}
