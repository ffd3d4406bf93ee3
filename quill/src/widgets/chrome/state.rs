use quill_gateway::HostPlatform;

/// Window decoration state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeState {
    is_fullscreen: bool,
    is_maximized: bool,
    platform: HostPlatform,
}

impl ChromeState {
    pub(crate) fn new(platform: HostPlatform) -> Self {
        Self {
            is_fullscreen: false,
            is_maximized: false,
            platform,
        }
    }

    pub(crate) fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub(crate) fn is_maximized(&self) -> bool {
        self.is_maximized
    }

    pub(crate) fn platform(&self) -> HostPlatform {
        self.platform
    }

    /// Toggle fullscreen state and return the new value.
    pub(crate) fn toggle_fullscreen(&mut self) -> bool {
        self.is_fullscreen = !self.is_fullscreen;
        self.is_fullscreen
    }

    /// Leave fullscreen; returns whether anything changed.
    pub(crate) fn exit_fullscreen(&mut self) -> bool {
        std::mem::replace(&mut self.is_fullscreen, false)
    }

    pub(crate) fn toggle_maximized(&mut self) -> bool {
        self.is_maximized = !self.is_maximized;
        self.is_maximized
    }
}
