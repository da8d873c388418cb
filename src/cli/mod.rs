// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for odc-client using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! odc [global options] <command>
//! init     --username --password [--hostname] [--port] [-f] [--skip-update-gitignore]
//! submit   [--remote-dir] [--skip-build] [--build-command] [--jar-path]
//!          [--python-dir] [--data-path] [--skip-data]
//! version
//! ```

pub mod global;
pub mod init;
pub mod submit;


use crate::cli::global::GlobalOptions;
use crate::cli::init::InitArgs;
use crate::cli::submit::SubmitArgs;
use clap::{Parser, Subcommand};

/// ODC Server Submission Client
///
/// Packages a Java or Python project and uploads it to the ODC server.
#[derive(Debug, Parser)]
#[command(
    name = "odc",
    author,
    version,
    about = "ODC Server Submission Client",
    long_about = "odc-client Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Packages a project and uploads it to the ODC server over SFTP.\n\n\
                  Run `odc init` once in the project directory to store your\n\
                  credentials in odc.json, then `odc submit` to build and upload.",
    after_help = "PROJECT DETECTION:\n\n\
                  A pom.xml makes the project a Java project: the jar is built\n\
                  with --build-command and uploaded from --jar-path. Otherwise an\n\
                  app/ directory (see --python-dir) or a main.py in the current\n\
                  directory makes it a Python project: its *.py files are zipped\n\
                  into app.zip. Unless --skip-data is given, *.csv files are\n\
                  zipped into data.zip and uploaded as well."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Stores the server credentials in odc.json.
    Init(InitArgs),

    /// Builds or zips the project and uploads it.
    Submit(SubmitArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
