// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submit command arguments.

use clap::Args;
use std::path::{Path, PathBuf};

use crate::cmd::submit::{DEFAULT_JAR_PATH, DEFAULT_REMOTE_DIR, SubmitOptions};
use crate::project::DEFAULT_PYTHON_DIR;
use crate::tools::build::DEFAULT_BUILD_COMMAND;

/// Arguments for the submit command.
#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    /// The remote directory to upload to. It is prefixed with '/home', so
    /// 'mydir' gives '/home/mydir'.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_REMOTE_DIR)]
    pub remote_dir: PathBuf,

    /// Skip building the jar.
    #[arg(long)]
    pub skip_build: bool,

    /// The command to build the jar.
    #[arg(long, value_name = "COMMAND", default_value = DEFAULT_BUILD_COMMAND)]
    pub build_command: String,

    /// The location of the compiled jar.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_JAR_PATH)]
    pub jar_path: PathBuf,

    /// The directory in which main.py lives.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_PYTHON_DIR)]
    pub python_dir: PathBuf,

    /// The directory holding the *.csv data files (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub data_path: Option<PathBuf>,

    /// Don't zip and upload data files.
    #[arg(long)]
    pub skip_data: bool,
}

impl SubmitArgs {
    /// Converts the arguments into [`SubmitOptions`] rooted at `work_dir`.
    #[must_use]
    pub fn into_options(self, work_dir: &Path) -> SubmitOptions {
        SubmitOptions::builder()
            .with_work_dir(work_dir)
            .with_remote_dir(self.remote_dir)
            .with_skip_build(self.skip_build)
            .with_build_command(self.build_command)
            .with_jar_path(self.jar_path)
            .with_python_dir(self.python_dir)
            .maybe_with_data_path(self.data_path)
            .with_skip_data(self.skip_data)
            .build()
    }
}
