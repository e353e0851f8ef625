//! Process boundary for the diagnostic command.
//!
//! [`CommandRunner`] lets the collector run against a fake in tests, since
//! netsh only exists on Windows and WSL.

use crate::error::{SegmentError, SegmentResult};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Runs external commands and answers whether they can be found
pub trait CommandRunner {
    /// Whether `command` resolves on the current `PATH`
    fn has_command(&self, command: &str) -> bool;

    /// Run `command` to completion and return its stdout.
    ///
    /// A non-zero exit status is an error.
    fn run(&self, command: &str, args: &[&str]) -> SegmentResult<String>;
}

/// Runs real processes, killing them once `timeout` elapses
#[derive(Debug, Clone)]
pub struct SystemCommandRunner {
    timeout: Duration,
}

impl SystemCommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Timeout in whole milliseconds, saturating at `u64::MAX`
    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl CommandRunner for SystemCommandRunner {
    fn has_command(&self, command: &str) -> bool {
        std::env::var_os("PATH").is_some_and(|path| find_in_path(command, &path).is_some())
    }

    fn run(&self, command: &str, args: &[&str]) -> SegmentResult<String> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SegmentError::Runtime)?;

        runtime.block_on(async {
            let child = tokio::process::Command::new(command)
                .args(args)
                .kill_on_drop(true)
                .output();

            let output = tokio::time::timeout(self.timeout, child)
                .await
                .map_err(|_elapsed| SegmentError::CommandTimedOut {
                    command: command.to_string(),
                    timeout_ms: self.timeout_ms(),
                })?
                .map_err(|source| SegmentError::SpawnFailed {
                    command: command.to_string(),
                    source,
                })?;

            if !output.status.success() {
                debug!(
                    command,
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "command failed"
                );
                return Err(SegmentError::CommandFailed {
                    command: command.to_string(),
                    code: output.status.code(),
                });
            }

            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        })
    }
}

/// Find `command` in the directories of a `PATH`-style list
pub fn find_in_path(command: &str, path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path)
        .flat_map(|dir| candidates(&dir, command))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidates(dir: &Path, command: &str) -> Vec<PathBuf> {
    let mut names = vec![dir.join(command)];
    if Path::new(command).extension().is_none() {
        names.extend(
            ["exe", "com", "cmd", "bat"]
                .iter()
                .map(|ext| dir.join(format!("{command}.{ext}"))),
        );
    }
    names
}

#[cfg(not(windows))]
fn candidates(dir: &Path, command: &str) -> Vec<PathBuf> {
    vec![dir.join(command)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
