/// Host operating system family, used to pick the window chrome style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl HostPlatform {
    /// Platform the process is running on.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// Whether window controls sit on the leading edge of the title bar.
    pub fn leading_window_controls(self) -> bool {
        matches!(self, Self::MacOs)
    }
}

#[cfg(test)]
mod tests {
    use super::HostPlatform;

    #[test]
    fn given_os_identifiers_when_parsed_then_platform_is_resolved() {
        assert_eq!(HostPlatform::from_os("macos"), HostPlatform::MacOs);
        assert_eq!(HostPlatform::from_os("windows"), HostPlatform::Windows);
        assert_eq!(HostPlatform::from_os("linux"), HostPlatform::Linux);
        assert_eq!(HostPlatform::from_os("freebsd"), HostPlatform::Other);
    }

    #[test]
    fn given_macos_when_queried_then_controls_sit_on_the_leading_edge() {
        assert!(HostPlatform::MacOs.leading_window_controls());
        assert!(!HostPlatform::Windows.leading_window_controls());
        assert!(!HostPlatform::Linux.leading_window_controls());
    }
}
