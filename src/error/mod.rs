// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 OdcError (~24 bytes)
//!                        |
//!   +------+------+------+------+------+------+
//!   |      |      |      |      |      |      |
//!   v      v      v      v      v      v      v
//! Config Project Build Process Archive Transport Io
//!  Box    Box    Box    Box     Box     Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Config    NotFound, MissingField, AlreadyExists, Parse, Write
//!   Project   Unclassifiable
//!   Build     EmptyCommand, Failed, ArtifactMissing, Process
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit, Wait
//!   Archive   SourceMissing, InvalidPattern, Io, Zip
//!   Transport Connect, Handshake, Auth, Sftp, Transfer
//!
//! Exit statuses:
//!   0 ok  1 other  2 build  3 config  4 config exists
//!   5 unclassifiable  6 transport
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`OdcError`].
pub type OdcResult<T> = std::result::Result<T, OdcError>;

/// Result type using [`TransportError`].
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Exit status for failures without a more specific category.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status when the config file is missing, incomplete or unreadable.
pub const EXIT_CONFIG_INVALID: u8 = 3;
/// Exit status when `init` would overwrite an existing config.
pub const EXIT_CONFIG_EXISTS: u8 = 4;
/// Exit status when the project kind cannot be determined.
pub const EXIT_UNCLASSIFIABLE: u8 = 5;
/// Exit status for connection, authentication and transfer failures.
pub const EXIT_TRANSPORT: u8 = 6;
/// Exit status when the build command fails or produces no artifact.
///
/// Status 2 is left to clap for usage errors.
pub const EXIT_BUILD_FAILED: u8 = 7;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
/// Variants are transparent: the message shown to the user is the
/// sub-error's own.
#[derive(Debug, Error)]
pub enum OdcError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] Box<ConfigError>),

    /// Project detection error.
    #[error(transparent)]
    Project(#[from] Box<ProjectError>),

    /// Build error.
    #[error(transparent)]
    Build(#[from] Box<BuildError>),

    /// Process execution error.
    #[error(transparent)]
    Process(#[from] Box<ProcessError>),

    /// Archive creation error.
    #[error(transparent)]
    Archive(#[from] Box<ArchiveError>),

    /// Remote transport error.
    #[error(transparent)]
    Transport(#[from] Box<TransportError>),

    /// I/O error.
    #[error(transparent)]
    Io(Box<std::io::Error>),
}

impl OdcError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Config(e) => e.exit_status(),
            Self::Project(_) => EXIT_UNCLASSIFIABLE,
            Self::Build(_) | Self::Process(_) => EXIT_BUILD_FAILED,
            Self::Transport(_) => EXIT_TRANSPORT,
            Self::Archive(_) | Self::Io(_) => EXIT_FAILURE,
        }
    }
}

/// Determine the process exit status for an error chain.
///
/// The first [`OdcError`] (or bare sub-error) found in the chain decides;
/// anything else maps to [`EXIT_FAILURE`].
#[must_use]
pub fn exit_status(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<OdcError>() {
            return e.exit_status();
        }
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            return e.exit_status();
        }
        if cause.is::<ProjectError>() {
            return EXIT_UNCLASSIFIABLE;
        }
        if cause.is::<BuildError>() || cause.is::<ProcessError>() {
            return EXIT_BUILD_FAILED;
        }
        if cause.is::<TransportError>() {
            return EXIT_TRANSPORT;
        }
    }
    EXIT_FAILURE
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for OdcError {
                fn from(err: $error) -> Self {
                    OdcError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ProjectError => Project,
    BuildError => Build,
    ProcessError => Process,
    ArchiveError => Archive,
    TransportError => Transport,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("Could not find config file '{path}'. Don't forget to run `init`")]
    NotFound { path: String },

    /// A required credential field is absent or null.
    #[error("Could not find a {field}. Don't forget to run `init`")]
    MissingField { field: &'static str },

    /// `init` without `--force` on an existing config.
    #[error("File {path} already exists. Use the --force option to overwrite it.")]
    AlreadyExists { path: String },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::NotFound { .. } | Self::MissingField { .. } | Self::Parse { .. } => {
                EXIT_CONFIG_INVALID
            }
            Self::AlreadyExists { .. } => EXIT_CONFIG_EXISTS,
            Self::Write { .. } => EXIT_FAILURE,
        }
    }
}

// --- Project Errors ---

/// Project detection errors.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// No marker file or directory matched.
    #[error("Can't figure out what kind of project '{dir}' is")]
    Unclassifiable { dir: String },
}

// --- Build Errors ---

/// Build step errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The build command was empty or whitespace only.
    #[error("build command is empty")]
    EmptyCommand,

    /// The build command exited unsuccessfully.
    #[error("Failed to build package: `{command}` exited with code {code}")]
    Failed { command: String, code: i32 },

    /// The build finished (or was skipped) but the artifact is not there.
    #[error("build artifact not found: {path}")]
    ArtifactMissing { path: String },

    /// The build process could not be run.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Waiting on the child failed.
    #[error("failed to wait for process '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Archive Errors ---

/// Archive creation errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The directory to archive does not exist.
    #[error("source directory not found: {0}")]
    SourceMissing(String),

    /// The glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// I/O failure while reading inputs or writing the archive.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failure inside the zip writer.
    #[error("failed to write archive '{path}': {source}")]
    Zip {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },
}

// --- Transport Errors ---

/// Remote transport errors.
///
/// Not distinguished further at the application layer; the underlying
/// message is surfaced as-is.
#[derive(Debug, Error)]
pub enum TransportError {
    /// TCP connection could not be established.
    #[error("failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// SSH session setup or handshake failed.
    #[error("SSH handshake with {host} failed: {source}")]
    Handshake {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// Authentication was rejected.
    #[error("authentication failed for user '{user}': {source}")]
    Auth {
        user: String,
        #[source]
        source: std::io::Error,
    },

    /// SFTP subsystem or session-level failure.
    #[error("sftp error: {source}")]
    Sftp {
        #[source]
        source: std::io::Error,
    },

    /// Uploading a file failed.
    #[error("failed to upload '{local}' to '{remote}': {source}")]
    Transfer {
        local: String,
        remote: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
