/// Centralized configuration for wifiseg
use crate::error::{SegmentError, SegmentResult};
use crate::render::Icons;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

// Timing
pub const COMMAND_TIMEOUT_MS: u64 = 2000;

/// Shown when no template is configured
pub const DEFAULT_TEMPLATE: &str = "{% if connected %}{{ ssid }} {{ signalPercent }}% {{ receiveRateMbps }}Mbps{% else %}{{ state }}{% endif %}";

// Icons - Nerd Fonts
pub mod icons {
    pub mod nerd {
        pub const CONNECTED: &str = "\u{f05a9} "; // nf-md-wifi
        pub const DISCONNECTED: &str = "\u{f05aa} "; // nf-md-wifi_off
    }

    pub mod ascii {
        pub const CONNECTED: &str = "[W] ";
        pub const DISCONNECTED: &str = "[X] ";
    }
}

/// Icon set to use based on configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSet {
    #[default]
    Nerd,
    Ascii,
}

impl IconSet {
    pub fn connected(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::CONNECTED,
            IconSet::Ascii => icons::ascii::CONNECTED,
        }
    }

    pub fn disconnected(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::DISCONNECTED,
            IconSet::Ascii => icons::ascii::DISCONNECTED,
        }
    }
}

/// Top-level config file layout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wifi: WifiConfig,
}

/// `[wifi]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WifiConfig {
    /// Show `WIFI ERR` instead of hiding the segment when netsh fails
    pub display_error: bool,
    pub template: Option<String>,
    pub show_icons: bool,
    pub icon_set: IconSet,
    pub connected_icon: Option<String>,
    pub disconnected_icon: Option<String>,
    pub command_timeout_ms: u64,
}

impl Default for WifiConfig {
    fn default() -> Self {
        Self {
            display_error: false,
            template: None,
            show_icons: true,
            icon_set: IconSet::default(),
            connected_icon: None,
            disconnected_icon: None,
            command_timeout_ms: COMMAND_TIMEOUT_MS,
        }
    }
}

impl WifiConfig {
    /// Configured template, or [`DEFAULT_TEMPLATE`] when unset or empty
    pub fn template(&self) -> &str {
        match self.template.as_deref() {
            Some(template) if !template.is_empty() => template,
            _ => DEFAULT_TEMPLATE,
        }
    }

    /// Icons to prefix, `None` when icons are turned off
    pub fn icons(&self) -> Option<Icons> {
        if !self.show_icons {
            return None;
        }
        Some(Icons {
            connected: self
                .connected_icon
                .clone()
                .unwrap_or_else(|| self.icon_set.connected().to_string()),
            disconnected: self
                .disconnected_icon
                .clone()
                .unwrap_or_else(|| self.icon_set.disconnected().to_string()),
        })
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }

    fn validate(&self) -> Result<(), String> {
        if self.command_timeout_ms == 0 {
            return Err("command_timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Config {
    /// Loads configuration from the default config path.
    /// Returns defaults if no home directory can be determined.
    pub fn load() -> SegmentResult<Self> {
        match paths::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> SegmentResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| SegmentError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| SegmentError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config
            .wifi
            .validate()
            .map_err(|reason| SegmentError::ConfigInvalid {
                path: path.to_path_buf(),
                reason,
            })?;
        Ok(config)
    }
}

pub mod paths {
    //! Path resolution for the config file.
    //!
    //! Home resolution order:
    //! 1. WIFISEG_HOME environment variable (if set)
    //! 2. <config dir>/wifiseg (`~/.config/wifiseg`, `%APPDATA%\wifiseg`)

    use std::path::PathBuf;

    pub const HOME_VAR: &str = "WIFISEG_HOME";

    pub fn home() -> Option<PathBuf> {
        if let Some(home) = std::env::var_os(HOME_VAR) {
            return Some(PathBuf::from(home));
        }
        dirs::config_dir().map(|dir| dir.join("wifiseg"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> Option<PathBuf> {
        home().map(|home| home.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(!config.wifi.display_error);
        assert!(config.wifi.show_icons);
        assert_eq!(config.wifi.template(), DEFAULT_TEMPLATE);
        assert_eq!(config.wifi.command_timeout(), Duration::from_millis(2000));
    }

    #[test]
    fn reads_wifi_section() {
        let file = write_config(
            r#"
[wifi]
display_error = true
template = "{{ ssid }}"
icon_set = "ascii"
command_timeout_ms = 500
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert!(config.wifi.display_error);
        assert_eq!(config.wifi.template(), "{{ ssid }}");
        assert_eq!(config.wifi.icon_set, IconSet::Ascii);
        assert_eq!(config.wifi.command_timeout(), Duration::from_millis(500));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let file = write_config("[wifi]\ncolour = \"red\"\n[other]\nx = 1\n");
        assert!(Config::load_from(file.path()).is_ok());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("[wifi]\ndisplay_error = \"maybe\"\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, SegmentError::ConfigParse { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let file = write_config("[wifi]\ncommand_timeout_ms = 0\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, SegmentError::ConfigInvalid { .. }));
        assert!(err.to_string().contains("command_timeout_ms"));
    }

    #[test]
    fn empty_template_falls_back_to_default() {
        let config = WifiConfig {
            template: Some(String::new()),
            ..WifiConfig::default()
        };
        assert_eq!(config.template(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn icons_follow_set_and_overrides() {
        let config = WifiConfig {
            icon_set: IconSet::Ascii,
            connected_icon: Some("up ".to_string()),
            ..WifiConfig::default()
        };
        let pair = config.icons().unwrap();
        assert_eq!(pair.connected, "up ");
        assert_eq!(pair.disconnected, icons::ascii::DISCONNECTED);
    }

    #[test]
    fn icons_can_be_disabled() {
        let config = WifiConfig {
            show_icons: false,
            ..WifiConfig::default()
        };
        assert!(config.icons().is_none());
    }
}
