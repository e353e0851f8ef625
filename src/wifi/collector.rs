use crate::wifi::command::CommandRunner;
use crate::wifi::parse::parse;
use crate::wifi::platform::{NETSH_ARGS, Platform, is_eligible};
use crate::wifi::types::WifiStatus;
use tracing::debug;

/// Gathers the wireless status for one prompt render
pub struct Collector<'a> {
    runner: &'a dyn CommandRunner,
    platform: Platform,
    display_error: bool,
}

impl<'a> Collector<'a> {
    pub fn new(runner: &'a dyn CommandRunner, platform: Platform, display_error: bool) -> Self {
        Self {
            runner,
            platform,
            display_error,
        }
    }

    /// Query netsh and parse its answer.
    ///
    /// `None` means the segment is not enabled: the platform has no netsh,
    /// the command is missing, or it failed while errors are hidden.
    pub fn collect(&self) -> Option<WifiStatus> {
        if !is_eligible(&self.platform) {
            debug!(platform = ?self.platform, "platform has no netsh");
            return None;
        }

        let command = self.platform.diagnostic_command();
        if !self.runner.has_command(command) {
            debug!(command, "command not found on PATH");
            return None;
        }

        match self.runner.run(command, &NETSH_ARGS) {
            Ok(output) => Some(parse(&output)),
            Err(e) if self.display_error => {
                debug!(error = %e, "showing error state");
                Some(WifiStatus::error())
            }
            Err(e) => {
                debug!(error = %e, "hiding segment");
                None
            }
        }
    }
}
