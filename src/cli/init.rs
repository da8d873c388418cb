// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Init command arguments.

use clap::Args;
use std::path::Path;

use crate::cmd::init::{InitOptions, prompt_password, prompt_username};
use crate::config::{DEFAULT_HOSTNAME, DEFAULT_PORT};
use crate::error::Result;

/// Arguments for the init command.
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Username on the ODC server; prompted for when absent.
    #[arg(long, env = "ODC_USERNAME")]
    pub username: Option<String>,

    /// Password on the ODC server; prompted for (hidden) when absent.
    #[arg(long, env = "ODC_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Hostname of the ODC server.
    #[arg(long, default_value = DEFAULT_HOSTNAME)]
    pub hostname: String,

    /// SSH port of the ODC server.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Overwrite an existing odc.json.
    #[arg(short, long)]
    pub force: bool,

    /// Don't add odc.json to .gitignore.
    #[arg(long)]
    pub skip_update_gitignore: bool,
}

impl InitArgs {
    /// Converts the arguments into [`InitOptions`], prompting for missing secrets.
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt cannot read from the terminal.
    pub fn into_options(self, work_dir: &Path) -> Result<InitOptions> {
        let username = match self.username {
            Some(username) => username,
            None => prompt_username()?,
        };
        let password = match self.password {
            Some(password) => password,
            None => prompt_password()?,
        };

        Ok(InitOptions::builder()
            .with_work_dir(work_dir)
            .with_username(username)
            .with_password(password)
            .with_hostname(self.hostname)
            .with_port(self.port)
            .with_force(self.force)
            .with_skip_update_gitignore(self.skip_update_gitignore)
            .build())
    }
}
