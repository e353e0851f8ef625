//! Wi-Fi status collection for the segment
//!
//! Runs `netsh wlan show interfaces` on Windows (or `netsh.exe` from WSL) and
//! parses the interesting fields into a [`WifiStatus`].

mod collector;
mod command;
mod parse;
mod platform;
mod types;

// Re-export public API
pub use collector::Collector;
pub use command::SystemCommandRunner;
pub use parse::parse;
pub use platform::Platform;
pub use types::WifiStatus;

#[cfg(test)]
pub(crate) use parse::SAMPLE_OUTPUT;
