// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command runner.
//!
//! ```text
//! "mvn clean package"
//!        |
//!   split_command()  --> ["mvn", "clean", "package"]
//!        |
//!   which_in(PATH, cwd) --> ProcessBuilder (inherited stdio)
//!        |
//!        v
//!   exit 0 --> Ok     NonZeroExit { code: n } --> BuildError::Failed { code: n }
//! ```
//!
//! Arguments are split on whitespace only. Quoted arguments containing
//! spaces are not supported.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;
use crate::error::{BuildError, OdcError, ProcessError, Result};
use futures_util::future::BoxFuture;

/// Default build command for Java projects.
pub const DEFAULT_BUILD_COMMAND: &str = "mvn clean package";

/// Splits a command line into program and arguments on whitespace.
#[must_use]
pub fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(String::from).collect()
}

/// Runs a user-supplied build command in the project directory.
///
/// # Example
///
/// ```ignore
/// BuildTool::new("mvn clean package").cwd(".").run(&ctx).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BuildTool {
    command: String,
    cwd: Option<PathBuf>,
}

impl BuildTool {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The command line as given, for progress and error messages.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    fn working_dir(&self) -> &Path {
        self.cwd.as_deref().unwrap_or_else(|| Path::new("."))
    }

    async fn execute(&self, ctx: &ToolContext) -> Result<()> {
        let parts = split_command(&self.command);
        let Some((program, args)) = parts.split_first() else {
            return Err(OdcError::from(BuildError::EmptyCommand).into());
        };
        let cwd = self.working_dir();

        if ctx.is_dry_run() {
            info!(
                command = %self.command,
                cwd = %cwd.display(),
                "[dry-run] Would run build command"
            );
            return Ok(());
        }

        ProcessBuilder::which(program, cwd)
            .map_err(|e| OdcError::from(BuildError::from(e)))?
            .args(args)
            .cwd(cwd)
            .run()
            .await
            .map_err(|e| {
                let err = match e {
                    ProcessError::NonZeroExit { code, .. } => BuildError::Failed {
                        command: self.command.clone(),
                        code,
                    },
                    other => BuildError::from(other),
                };
                OdcError::from(err)
            })?;

        debug!(command = %self.command, "build finished");
        Ok(())
    }
}

impl Tool for BuildTool {
    fn name(&self) -> &'static str {
        "build"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.execute(ctx))
    }
}

#[cfg(test)]
mod tests;
