//! Outbound navigation.
//!
//! Opening a tool hands its URL to the platform opener and returns as soon
//! as the child process is spawned. Nothing waits on it.

use crate::error::{DevkitError, Result};
use log::{info, warn};
use std::process::{Command, Stdio};

/// Something that can open a URL.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Spawns the platform opener, or a configured command.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    /// Replaces the platform default when set; the URL is passed as the last argument
    command: Option<String>,
}

impl SystemOpener {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn build_command(&self, url: &str) -> Result<Command> {
        if let Some(custom) = &self.command {
            let mut parts = custom.split_whitespace();
            let program = parts
                .next()
                .ok_or_else(|| DevkitError::Launch("open_command is empty".to_string()))?;
            let mut cmd = Command::new(program);
            cmd.args(parts).arg(url);
            return Ok(cmd);
        }

        #[cfg(target_os = "windows")]
        let cmd = {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        };

        #[cfg(target_os = "macos")]
        let cmd = {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        };

        #[cfg(all(unix, not(target_os = "macos")))]
        let cmd = {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        };

        Ok(cmd)
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let mut cmd = self.build_command(url)?;
        // Detach from the terminal the TUI is drawing on.
        cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());

        match cmd.spawn() {
            Ok(child) => {
                info!("Opened {} (pid {})", url, child.id());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to open {}: {}", url, e);
                Err(DevkitError::Launch(format!("{:?}: {}", cmd.get_program(), e)))
            }
        }
    }
}
