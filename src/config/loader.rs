// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Credential loading and validation.
//!
//! # Loader Pipeline
//!
//! ```text
//! CredentialsLoader::new(path)
//!   exists?        no  --> ConfigError::NotFound
//!   config::File (JSON, required)
//!   try_deserialize --> JSON object (kinds preserved)
//!   per field, in order:
//!     absent / null    --> ConfigError::MissingField
//!     wrong JSON kind  --> ConfigError::Parse
//!        |
//!        v
//!    Credentials
//! ```
//!
//! The `config` crate coerces scalars on typed access (`"222"` or `true`
//! into a port), so fields are checked against the raw JSON kind instead.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::Credentials;
use crate::error::{ConfigError, OdcError, Result};

/// Field names, in the order they are validated.
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const HOSTNAME: &str = "hostname";
pub const PORT: &str = "port";

/// Parsed document with field access that rejects coerced values.
struct RawCredentials<'a> {
    path: &'a str,
    document: Map<String, Value>,
}

impl RawCredentials<'_> {
    fn field(&self, field: &'static str) -> std::result::Result<&Value, ConfigError> {
        match self.document.get(field) {
            None | Some(Value::Null) => Err(ConfigError::MissingField { field }),
            Some(value) => Ok(value),
        }
    }

    fn wrong_type(&self, field: &str, expected: &str, found: &Value) -> ConfigError {
        ConfigError::Parse {
            path: self.path.to_string(),
            message: format!("`{field}` must be {expected}, found {}", kind_name(found)),
        }
    }

    fn string(&self, field: &'static str) -> std::result::Result<String, ConfigError> {
        match self.field(field)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(self.wrong_type(field, "a string", other)),
        }
    }

    fn port(&self) -> std::result::Result<u16, ConfigError> {
        let value = self.field(PORT)?;
        value
            .as_u64()
            .and_then(|port| u16::try_from(port).ok())
            .ok_or_else(|| self.wrong_type(PORT, "an integer between 0 and 65535", value))
    }

    fn validate(self) -> std::result::Result<Credentials, ConfigError> {
        Ok(Credentials {
            username: self.string(USERNAME)?,
            password: self.string(PASSWORD)?,
            hostname: self.string(HOSTNAME)?,
            port: self.port()?,
        })
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads a credential document through the `config` crate.
pub struct CredentialsLoader {
    path: PathBuf,
}

impl CredentialsLoader {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads and validates the document.
    ///
    /// # Errors
    ///
    /// See [`Credentials::load`].
    pub fn load(&self) -> Result<Credentials> {
        use config::{File, FileFormat};

        let display = self.path.display().to_string();

        if !self.path.is_file() {
            return Err(OdcError::from(ConfigError::NotFound { path: display }).into());
        }

        let parse_error = |e: config::ConfigError| {
            OdcError::from(ConfigError::Parse {
                path: display.clone(),
                message: e.to_string(),
            })
        };

        let document = config::Config::builder()
            .add_source(
                File::from(self.path.as_path())
                    .format(FileFormat::Json)
                    .required(true),
            )
            .build()
            .and_then(config::Config::try_deserialize::<Map<String, Value>>)
            .map_err(parse_error)?;

        let raw = RawCredentials {
            path: &display,
            document,
        };
        let credentials = raw.validate().map_err(OdcError::from)?;
        Ok(credentials)
    }
}
