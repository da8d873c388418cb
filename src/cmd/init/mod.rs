// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Init command implementation.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use bon::Builder;
use tracing::info;

use crate::config::{
    self, CONFIG_FILE_NAME, Credentials, DEFAULT_HOSTNAME, DEFAULT_PORT, GitignoreUpdate,
};
use crate::error::Result;

/// Options for writing a new `odc.json`.
#[derive(Debug, Clone, Builder)]
pub struct InitOptions {
    #[builder(setters(name = with_work_dir), into, default = PathBuf::from("."))]
    pub work_dir: PathBuf,
    #[builder(setters(name = with_username), into)]
    pub username: String,
    #[builder(setters(name = with_password), into)]
    pub password: String,
    #[builder(setters(name = with_hostname), into, default = DEFAULT_HOSTNAME.to_string())]
    pub hostname: String,
    #[builder(setters(name = with_port), default = DEFAULT_PORT)]
    pub port: u16,
    /// Replace an existing config instead of failing.
    #[builder(setters(name = with_force), default = false)]
    pub force: bool,
    #[builder(setters(name = with_skip_update_gitignore), default = false)]
    pub skip_update_gitignore: bool,
}

impl InitOptions {
    fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
            hostname: self.hostname.clone(),
            port: self.port,
        }
    }
}

/// What `init` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub config_path: PathBuf,
    /// `None` when the ignore file update was skipped.
    pub gitignore: Option<GitignoreUpdate>,
}

/// Main handler for the init command.
///
/// # Errors
///
/// Returns an error if the config exists and `force` is not set, if it
/// cannot be written, or if the ignore file cannot be appended to.
pub fn run_init(options: &InitOptions) -> Result<InitOutcome> {
    let config_path = options.work_dir.join(CONFIG_FILE_NAME);
    config::initialize(&config_path, &options.credentials(), options.force)?;
    info!(path = %config_path.display(), "config written");

    let gitignore = if options.skip_update_gitignore {
        None
    } else {
        let update = config::update_gitignore(&options.work_dir)?;
        if update == GitignoreUpdate::NotFound {
            println!("No .gitignore found.");
        }
        Some(update)
    };

    Ok(InitOutcome {
        config_path,
        gitignore,
    })
}

/// Asks for the username on the terminal.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub fn prompt_username() -> Result<String> {
    print!("Username: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read username")?;
    Ok(line.trim().to_string())
}

/// Asks for the password without echoing it.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub fn prompt_password() -> Result<String> {
    rpassword::prompt_password("Password: ").context("failed to read password")
}
