// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::which("mvn", cwd)
//!   .args() .cwd()
//!   .run()
//!       --> tokio::process::Command (inherited stdio)
//!       --> Ok(()) | ProcessError
//! ```

pub mod builder;
mod runner;
#[cfg(test)]
mod tests;
