/// Typed errors for the Wi-Fi segment
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for segment operations
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Errors that can occur while collecting or rendering the segment
#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Failed to start `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited unsuccessfully ({})", exit_code_to_string(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("`{command}` did not finish within {timeout_ms}ms")]
    CommandTimedOut { command: String, timeout_ms: u64 },

    #[error("Failed to build process runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Failed to read config from {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {}: {reason}", path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to parse config from {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Convert a process exit code to a human-readable string
pub fn exit_code_to_string(code: &Option<i32>) -> String {
    match code {
        // netsh reports a stopped WLAN AutoConfig service this way
        Some(1) => "exit code 1, is the WLAN service running?".to_string(),
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
