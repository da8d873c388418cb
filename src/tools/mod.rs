// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool abstractions for the submission steps.
//!
//! ```text
//! submit --> ToolContext --> Tool::run
//!              |               |
//!           dry_run      BuildTool  (ProcessBuilder, inherited stdio)
//!                        PackerTool (zip, flattened entries)
//! ```

use futures_util::future::BoxFuture;

use crate::error::Result;

pub mod build;
pub mod packer;

/// Context provided to tools during execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolContext {
    /// When true, tools log what they would do without making changes.
    dry_run: bool,
}

impl ToolContext {
    /// Creates a new `ToolContext`.
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// A single submission step backed by an external program or a file operation.
///
/// Tools should respect [`ToolContext::is_dry_run`] and only log actions
/// without executing them.
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "build", "packer").
    fn name(&self) -> &str;

    /// Executes the tool's operation.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}

#[cfg(test)]
mod test_utils;
