use serde::Serialize;

/// Sentinel state shown when the diagnostic command fails and errors are displayed
pub const ERROR_STATE: &str = "WIFI ERR";

/// State string netsh reports for an associated interface
pub const CONNECTED_STATE: &str = "connected";

/// Wireless interface status, as reported by one `netsh wlan show interfaces` run.
///
/// Field names serialize in camelCase because templates and `--json` output
/// address them that way (`{{ signalPercent }}`).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiStatus {
    #[serde(rename = "state")]
    pub connection_state: String,
    pub ssid: String,
    pub radio_type: String,
    pub authentication: String,
    pub channel: u32,
    pub receive_rate_mbps: u32,
    pub transmit_rate_mbps: u32,
    pub signal_percent: u32,
}

impl WifiStatus {
    /// Status shown in place of real data when the command failed
    pub fn error() -> Self {
        Self {
            connection_state: ERROR_STATE.to_string(),
            ..Self::default()
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection_state == CONNECTED_STATE
    }

    pub fn is_error(&self) -> bool {
        self.connection_state == ERROR_STATE
    }
}
