use std::fs;
use tracing::debug;

/// netsh binary name on Windows
pub const NETSH: &str = "netsh";
/// netsh binary name as seen from inside WSL
pub const NETSH_WSL: &str = "netsh.exe";
/// Arguments asking netsh for wireless interface details
pub const NETSH_ARGS: [&str; 3] = ["wlan", "show", "interfaces"];

const WSL_DISTRO_VAR: &str = "WSL_DISTRO_NAME";
const OSRELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

/// Operating system family the binary runs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Linux,
    MacOs,
    Other(String),
}

impl OsFamily {
    fn from_os(os: &str) -> Self {
        match os {
            "windows" => OsFamily::Windows,
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::MacOs,
            other => OsFamily::Other(other.to_string()),
        }
    }
}

/// Host platform as far as the segment cares about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: OsFamily,
    /// Running under the Windows Subsystem for Linux
    pub wsl: bool,
}

impl Platform {
    pub fn detect() -> Self {
        let os = OsFamily::from_os(std::env::consts::OS);
        let wsl = os == OsFamily::Linux
            && is_wsl(
                std::env::var(WSL_DISTRO_VAR).ok().as_deref(),
                fs::read_to_string(OSRELEASE_PATH).ok().as_deref(),
            );
        let platform = Self { os, wsl };
        debug!(?platform, "detected platform");
        platform
    }

    /// Name of the diagnostic binary to look up and run
    pub fn diagnostic_command(&self) -> &'static str {
        if self.wsl { NETSH_WSL } else { NETSH }
    }
}

/// Whether netsh can be reached on this platform at all
pub fn is_eligible(platform: &Platform) -> bool {
    platform.os == OsFamily::Windows || platform.wsl
}

fn is_wsl(distro_name: Option<&str>, osrelease: Option<&str>) -> bool {
    if distro_name.is_some_and(|name| !name.is_empty()) {
        return true;
    }
    osrelease.is_some_and(|release| release.to_lowercase().contains("microsoft"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(os: OsFamily, wsl: bool) -> Platform {
        Platform { os, wsl }
    }

    #[test]
    fn windows_is_eligible() {
        assert!(is_eligible(&platform(OsFamily::Windows, false)));
    }

    #[test]
    fn wsl_is_eligible() {
        assert!(is_eligible(&platform(OsFamily::Linux, true)));
    }

    #[test]
    fn other_platforms_are_not_eligible() {
        assert!(!is_eligible(&platform(OsFamily::Linux, false)));
        assert!(!is_eligible(&platform(OsFamily::MacOs, false)));
        assert!(!is_eligible(&platform(
            OsFamily::Other("freebsd".to_string()),
            false
        )));
    }

    #[test]
    fn wsl_uses_exe_suffix() {
        assert_eq!(platform(OsFamily::Linux, true).diagnostic_command(), "netsh.exe");
        assert_eq!(platform(OsFamily::Windows, false).diagnostic_command(), "netsh");
    }

    #[test]
    fn os_family_from_rust_target_names() {
        assert_eq!(OsFamily::from_os("windows"), OsFamily::Windows);
        assert_eq!(OsFamily::from_os("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_os("macos"), OsFamily::MacOs);
        assert_eq!(
            OsFamily::from_os("netbsd"),
            OsFamily::Other("netbsd".to_string())
        );
    }

    #[test]
    fn wsl_detected_from_distro_variable() {
        assert!(is_wsl(Some("Ubuntu"), None));
        assert!(!is_wsl(Some(""), None));
    }

    #[test]
    fn wsl_detected_from_kernel_release() {
        assert!(is_wsl(None, Some("5.15.133.1-microsoft-standard-WSL2\n")));
        assert!(is_wsl(None, Some("4.4.0-19041-Microsoft")));
        assert!(!is_wsl(None, Some("6.8.0-45-generic")));
        assert!(!is_wsl(None, None));
    }
}
