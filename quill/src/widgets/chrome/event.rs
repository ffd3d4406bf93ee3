use iced::window;

/// UI events emitted by the action bar.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    MinimizePressed,
    MaximizePressed,
    ClosePressed,
    SidebarTogglePressed,
    TitleBarPressed,
    TitleBarDoubleClicked,
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEffect {
    WindowModeChanged { mode: window::Mode },
    MaximizeToggled { maximized: bool },
    MinimizeWindow,
    CloseRequested,
    ToggleSidebar,
    StartWindowDrag,
}
