// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Credential storage for the ODC server.
//!
//! # Config File
//!
//! ```text
//! <cwd>/odc.json
//! {
//!   "username": "s123456",
//!   "password": "...",
//!   "hostname": "odc-09.win.tue.nl",
//!   "port": 222
//! }
//! ```
//!
//! All four keys are required. A file missing any of them is rejected as a
//! whole; there is no partial record.
//!
//! # Lifecycle
//!
//! ```text
//! init   --> initialize(path, creds, overwrite) --> update_gitignore(dir)
//! submit --> Credentials::load(path)
//! ```

pub mod loader;


use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write as _;
use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, OdcError, Result};
use loader::CredentialsLoader;

/// Name of the credential file, relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "odc.json";

/// Default SFTP host.
pub const DEFAULT_HOSTNAME: &str = "odc-09.win.tue.nl";

/// Default SFTP port.
pub const DEFAULT_PORT: u16 = 222;

/// Version-control ignore file updated by `init`.
pub const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Marker appended to the ignore file.
pub const GITIGNORE_MARKER: &str = "\n# ODC Client\nodc.json\n";

/// Credentials needed to open an SFTP session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .finish()
    }
}

impl Credentials {
    /// Creates a record with the default host and port.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Loads and validates credentials from a JSON config file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if the file does not exist.
    /// - [`ConfigError::MissingField`] naming the first absent or null field.
    /// - [`ConfigError::Parse`] if the file is not valid JSON or a field has
    ///   the wrong type.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let credentials = CredentialsLoader::new(path).load()?;
        debug!(
            path = %path.display(),
            user = %credentials.username,
            host = %credentials.hostname,
            port = credentials.port,
            "loaded credentials"
        );
        Ok(credentials)
    }

    /// Address used for the TCP connection.
    #[must_use]
    pub fn address(&self) -> (&str, u16) {
        (self.hostname.as_str(), self.port)
    }
}

/// Persists credentials to `path`.
///
/// The document is written to a temporary file next to `path` and then
/// moved into place, so an existing config is either fully replaced or
/// left untouched.
///
/// # Errors
///
/// - [`ConfigError::AlreadyExists`] if `path` exists and `overwrite` is false.
/// - [`ConfigError::Write`] if the file cannot be written.
pub fn initialize(path: impl AsRef<Path>, credentials: &Credentials, overwrite: bool) -> Result<()> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    if !overwrite && path.exists() {
        return Err(OdcError::from(ConfigError::AlreadyExists { path: shown }).into());
    }

    let write_error = |source: std::io::Error| {
        OdcError::from(ConfigError::Write {
            path: shown.clone(),
            source,
        })
    };

    let json = serde_json::to_string_pretty(credentials)
        .map_err(|e| write_error(std::io::Error::other(e)))?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(json.as_bytes()).map_err(write_error)?;
    temp.flush().map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;

    debug!(path = %shown, overwrite, "wrote config");
    Ok(())
}

/// Outcome of [`update_gitignore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitignoreUpdate {
    /// The marker was appended.
    Appended,
    /// No ignore file in the directory; nothing was changed.
    NotFound,
}

/// Appends the config file name to the `.gitignore` in `dir`, if there is one.
///
/// # Errors
///
/// Returns an error if the ignore file exists but cannot be appended to.
pub fn update_gitignore(dir: impl AsRef<Path>) -> Result<GitignoreUpdate> {
    use anyhow::Context;

    let gitignore = dir.as_ref().join(GITIGNORE_FILE_NAME);
    if !gitignore.is_file() {
        return Ok(GitignoreUpdate::NotFound);
    }

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(&gitignore)
        .with_context(|| format!("failed to open {}", gitignore.display()))?;
    file.write_all(GITIGNORE_MARKER.as_bytes())
        .with_context(|| format!("failed to append to {}", gitignore.display()))?;

    debug!(path = %gitignore.display(), "updated ignore file");
    Ok(GitignoreUpdate::Appended)
}
