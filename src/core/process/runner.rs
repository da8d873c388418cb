// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()   args, cwd, inherited stdio
//!   |
//!   v
//! spawn() --> wait()
//!   |
//!   v
//! exit 0 --> Ok     exit n --> ProcessError::NonZeroExit { code: n }
//! ```
//!
//! No timeout is applied; the caller waits until the child exits.

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::ProcessBuilder;
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    pub(crate) fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - Waiting on the child fails.
    /// - The process exits with a non-zero status. A child killed by a
    ///   signal reports code `-1`.
    pub async fn run(self) -> Result<(), ProcessError> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let status = child.wait().await.map_err(|source| ProcessError::Wait {
            command: cmd_line.clone(),
            source,
        })?;

        let code = status.code().unwrap_or(-1);
        trace!(process = %name, exit_code = code, "completed");
        if !status.success() {
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code,
            });
        }
        Ok(())
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        command
    }
}
