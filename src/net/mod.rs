// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote transport for submission bundles.
//!
//! ```text
//! Transport::open(&Credentials) --> Session
//!                                     |
//!                              SessionGuard (close on drop)
//!                                     |
//!                    put(local, RemoteDestination::file(name))
//!                                     |
//!                                  close()
//!
//! RemoteDestination: "/home" + remote_dir segments + file name
//! SftpTransport: TCP --> SSH handshake --> password auth --> SFTP
//! ```
//!
//! The traits are synchronous; one session carries every upload of a run.

use std::path::Path;

use tracing::warn;

use crate::config::Credentials;
use crate::error::TransportResult;

mod sftp;

pub use sftp::{SftpSession, SftpTransport};

/// Root directory every remote destination lives under.
pub const REMOTE_ROOT: &str = "/home";

/// Opens authenticated sessions to the submission server.
pub trait Transport {
    type Session: Session;

    /// Connects and authenticates with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`](crate::error::TransportError) if the
    /// connection, handshake or authentication fails.
    fn open(&self, credentials: &Credentials) -> TransportResult<Self::Session>;
}

/// An open, authenticated session.
pub trait Session {
    /// Uploads `local` to the absolute remote path `remote`, returning bytes sent.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`](crate::error::TransportError) if the file
    /// cannot be read or the remote write fails.
    fn put(&mut self, local: &Path, remote: &str) -> TransportResult<u64>;

    /// Ends the session.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`](crate::error::TransportError) if the
    /// disconnect fails.
    fn close(&mut self) -> TransportResult<()>;
}

/// Closes the wrapped session on drop unless [`close`](Self::close) was called.
pub struct SessionGuard<S: Session> {
    session: S,
    closed: bool,
}

impl<S: Session> SessionGuard<S> {
    pub const fn new(session: S) -> Self {
        Self {
            session,
            closed: false,
        }
    }

    /// Uploads through the guarded session.
    ///
    /// # Errors
    ///
    /// Propagates the session's upload error.
    pub fn put(&mut self, local: &Path, remote: &str) -> TransportResult<u64> {
        self.session.put(local, remote)
    }

    /// Closes the session and reports the result.
    ///
    /// # Errors
    ///
    /// Propagates the session's close error.
    pub fn close(mut self) -> TransportResult<()> {
        self.closed = true;
        self.session.close()
    }
}

impl<S: Session> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        if !self.closed
            && let Err(e) = self.session.close()
        {
            warn!(error = %e, "failed to close remote session");
        }
    }
}

/// Remote directory that bundles are uploaded into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDestination {
    dir: String,
}

impl RemoteDestination {
    /// Resolves `remote_dir` under [`REMOTE_ROOT`].
    ///
    /// `\` is treated as a separator. Empty and `.` segments are dropped and
    /// `..` removes the previous segment, stopping at the root. A leading `/`
    /// stays under the root.
    #[must_use]
    pub fn new(remote_dir: impl AsRef<Path>) -> Self {
        let raw = remote_dir.as_ref().to_string_lossy();
        let mut segments: Vec<&str> = Vec::new();
        for segment in raw.split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name),
            }
        }

        let mut dir = String::from(REMOTE_ROOT);
        for segment in segments {
            dir.push('/');
            dir.push_str(segment);
        }
        Self { dir }
    }

    /// The resolved remote directory.
    #[must_use]
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Remote path for a file named `name` inside this destination.
    #[must_use]
    pub fn file(&self, name: &str) -> String {
        format!("{}/{name}", self.dir)
    }
}

impl Default for RemoteDestination {
    fn default() -> Self {
        Self::new(".")
    }
}
