//! Parser for `netsh wlan show interfaces` output.
//!
//! The output is a loose list of `Label : value` lines padded for alignment,
//! mixed with headers and blank lines. Only a fixed set of labels is read;
//! everything else is skipped.

use crate::wifi::types::WifiStatus;
use tracing::trace;

const DELIMITER: &str = " : ";

/// Fields of [`WifiStatus`] that can be filled from a labelled line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    State,
    Ssid,
    RadioType,
    Authentication,
    Channel,
    ReceiveRate,
    TransmitRate,
    Signal,
}

/// How the raw value text of a field is turned into its typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueRule {
    /// Stored as-is
    Verbatim,
    /// Plain integer, e.g. `Channel : 36`
    Integer,
    /// Integer part of a decimal, e.g. `Receive rate (Mbps) : 866.5`
    TruncatedDecimal,
    /// Integer followed by `%`, e.g. `Signal : 80%`
    Percent,
}

impl Field {
    /// Exact, case-sensitive label match
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "State" => Some(Field::State),
            "SSID" => Some(Field::Ssid),
            "Radio type" => Some(Field::RadioType),
            "Authentication" => Some(Field::Authentication),
            "Channel" => Some(Field::Channel),
            "Receive rate (Mbps)" => Some(Field::ReceiveRate),
            "Transmit rate (Mbps)" => Some(Field::TransmitRate),
            "Signal" => Some(Field::Signal),
            _ => None,
        }
    }

    fn rule(self) -> ValueRule {
        match self {
            Field::State | Field::Ssid | Field::RadioType | Field::Authentication => {
                ValueRule::Verbatim
            }
            Field::Channel => ValueRule::Integer,
            Field::ReceiveRate | Field::TransmitRate => ValueRule::TruncatedDecimal,
            Field::Signal => ValueRule::Percent,
        }
    }

    fn text_slot(self, status: &mut WifiStatus) -> Option<&mut String> {
        match self {
            Field::State => Some(&mut status.connection_state),
            Field::Ssid => Some(&mut status.ssid),
            Field::RadioType => Some(&mut status.radio_type),
            Field::Authentication => Some(&mut status.authentication),
            _ => None,
        }
    }

    fn number_slot(self, status: &mut WifiStatus) -> Option<&mut u32> {
        match self {
            Field::Channel => Some(&mut status.channel),
            Field::ReceiveRate => Some(&mut status.receive_rate_mbps),
            Field::TransmitRate => Some(&mut status.transmit_rate_mbps),
            Field::Signal => Some(&mut status.signal_percent),
            _ => None,
        }
    }

    /// Store `value` in `status`. A value that does not fit the rule leaves
    /// the field untouched.
    fn apply(self, value: &str, status: &mut WifiStatus) {
        match self.rule() {
            ValueRule::Verbatim => {
                if let Some(slot) = self.text_slot(status) {
                    *slot = value.to_string();
                }
            }
            rule => match parse_number(rule, value) {
                Some(number) => {
                    if let Some(slot) = self.number_slot(status) {
                        *slot = number;
                    }
                }
                None => trace!(field = ?self, value, "ignoring malformed value"),
            },
        }
    }
}

fn parse_number(rule: ValueRule, value: &str) -> Option<u32> {
    let digits = match rule {
        ValueRule::Verbatim => return None,
        ValueRule::Integer => value,
        ValueRule::TruncatedDecimal => value.split('.').next().unwrap_or_default(),
        ValueRule::Percent => value.trim_end_matches('%'),
    };
    digits.parse().ok()
}

/// Split a line into its trimmed label and value at the first ` : `.
///
/// Both sides must carry at least one character before trimming.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let (label, value) = line.split_once(DELIMITER)?;
    if label.is_empty() || value.is_empty() {
        return None;
    }
    Some((label.trim(), value.trim()))
}

/// Parse raw diagnostic output into a fresh [`WifiStatus`].
///
/// Lines without a `label : value` shape and unknown labels are skipped. When
/// a label appears more than once the last valid value wins.
pub fn parse(raw: &str) -> WifiStatus {
    let mut status = WifiStatus::default();

    for line in raw.lines() {
        let Some((label, value)) = split_line(line) else {
            continue;
        };
        match Field::from_label(label) {
            Some(field) => field.apply(value, &mut status),
            None => trace!(label, "skipping unknown label"),
        }
    }

    status
}

/// Captured output of a connected Windows laptop
#[cfg(test)]
pub(crate) const SAMPLE_OUTPUT: &str = "
    There is 1 interface on the system:

    Name                   : Wi-Fi
    Description            : Intel(R) Wireless-AC 9560 160MHz
    GUID                   : 6bb8def2-9af2-4bd4-8be2-6bd54e46bdc9
    Physical address       : d4:3b:04:e6:10:40
    State                  : connected
    SSID                   : ohsiggy
    BSSID                  : 5c:7d:7d:82:c5:73
    Network type           : Infrastructure
    Radio type             : 802.11ac
    Authentication         : WPA2-Personal
    Cipher                 : CCMP
    Connection mode        : Profile
    Channel                : 99
    Receive rate (Mbps)    : 500.0
    Transmit rate (Mbps)   : 400.0
    Signal                 : 80%
    Profile                : ohsiggy

    Hosted network status  : Not available";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_dump() {
        let status = parse(SAMPLE_OUTPUT);
        assert_eq!(
            status,
            WifiStatus {
                connection_state: "connected".to_string(),
                ssid: "ohsiggy".to_string(),
                radio_type: "802.11ac".to_string(),
                authentication: "WPA2-Personal".to_string(),
                channel: 99,
                receive_rate_mbps: 500,
                transmit_rate_mbps: 400,
                signal_percent: 80,
            }
        );
    }

    #[test]
    fn handles_crlf_line_endings() {
        let status = parse("State : connected\r\nSignal : 42%\r\nChannel : 6\r\n");
        assert_eq!(status.connection_state, "connected");
        assert_eq!(status.signal_percent, 42);
        assert_eq!(status.channel, 6);
    }

    #[test]
    fn empty_output_yields_default_status() {
        assert_eq!(parse(""), WifiStatus::default());
    }

    #[test]
    fn disconnected_dump_keeps_only_state() {
        let raw = "
    Name                   : Wi-Fi
    State                  : disconnected
    Radio status           : Hardware On";
        let status = parse(raw);
        assert_eq!(status.connection_state, "disconnected");
        assert!(status.ssid.is_empty());
        assert_eq!(status.signal_percent, 0);
    }

    #[test]
    fn malformed_numbers_do_not_affect_other_fields() {
        let raw = "
    Channel                : auto
    Receive rate (Mbps)    : fast
    Transmit rate (Mbps)   : 300.5
    Signal                 : strong%
    SSID                   : cafe";
        let status = parse(raw);
        assert_eq!(status.channel, 0);
        assert_eq!(status.receive_rate_mbps, 0);
        assert_eq!(status.transmit_rate_mbps, 300);
        assert_eq!(status.signal_percent, 0);
        assert_eq!(status.ssid, "cafe");
    }

    #[test]
    fn malformed_repeat_keeps_previous_value() {
        let status = parse("Signal : 71%\nSignal : n/a\n");
        assert_eq!(status.signal_percent, 71);
    }

    #[test]
    fn later_valid_value_wins() {
        let status = parse("SSID : first\nChannel : 1\nSSID : second\nChannel : 11\n");
        assert_eq!(status.ssid, "second");
        assert_eq!(status.channel, 11);
    }

    #[test]
    fn rate_fraction_is_truncated_not_rounded() {
        let status = parse("Receive rate (Mbps) : 866.7\nTransmit rate (Mbps) : 72\n");
        assert_eq!(status.receive_rate_mbps, 866);
        assert_eq!(status.transmit_rate_mbps, 72);
    }

    #[test]
    fn signal_without_percent_still_parses() {
        assert_eq!(parse("Signal : 55").signal_percent, 55);
    }

    #[test]
    fn negative_numbers_are_rejected() {
        assert_eq!(parse("Channel : -3").channel, 0);
    }

    #[test]
    fn labels_are_case_sensitive() {
        let status = parse("state : connected\nssid : lower\nRADIO TYPE : 802.11n\n");
        assert_eq!(status, WifiStatus::default());
    }

    #[test]
    fn value_may_contain_delimiter() {
        assert_eq!(parse("SSID : a : b").ssid, "a : b");
    }

    #[test]
    fn lines_without_delimiter_are_skipped() {
        let status = parse("SSID:nospace\nSSID :\n : orphan\nState : connected");
        assert!(status.ssid.is_empty());
        assert_eq!(status.connection_state, "connected");
    }
}
