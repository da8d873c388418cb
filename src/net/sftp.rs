// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! SFTP transport over libssh2.
//!
//! No timeouts are set on the socket or the session.

use std::fs::File;
use std::io;
use std::net::TcpStream;
use std::path::Path;

use tracing::{debug, info};

use super::{Session, Transport};
use crate::config::Credentials;
use crate::error::{TransportError, TransportResult};

/// Password-authenticated SFTP connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SftpTransport;

impl SftpTransport {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transport for SftpTransport {
    type Session = SftpSession;

    fn open(&self, credentials: &Credentials) -> TransportResult<SftpSession> {
        let (host, port) = credentials.address();

        debug!(host, port, "connecting");
        let tcp = TcpStream::connect((host, port)).map_err(|source| TransportError::Connect {
            host: host.to_string(),
            port,
            source,
        })?;

        let handshake_error = |e: ssh2::Error| TransportError::Handshake {
            host: host.to_string(),
            source: e.into(),
        };
        let mut session = ssh2::Session::new().map_err(handshake_error)?;
        session.set_tcp_stream(tcp);
        session.handshake().map_err(handshake_error)?;

        session
            .userauth_password(&credentials.username, &credentials.password)
            .map_err(|e| TransportError::Auth {
                user: credentials.username.clone(),
                source: e.into(),
            })?;

        let sftp = session
            .sftp()
            .map_err(|e| TransportError::Sftp { source: e.into() })?;

        info!(host, port, user = %credentials.username, "session opened");
        Ok(SftpSession {
            session,
            sftp: Some(sftp),
        })
    }
}

/// An authenticated SSH session with its SFTP channel.
pub struct SftpSession {
    session: ssh2::Session,
    sftp: Option<ssh2::Sftp>,
}

impl Session for SftpSession {
    fn put(&mut self, local: &Path, remote: &str) -> TransportResult<u64> {
        let transfer_error = |source: io::Error| TransportError::Transfer {
            local: local.display().to_string(),
            remote: remote.to_string(),
            source,
        };

        let sftp = self
            .sftp
            .as_ref()
            .ok_or_else(|| transfer_error(io::Error::other("session is closed")))?;

        let mut input = File::open(local).map_err(transfer_error)?;
        let mut output = sftp
            .create(Path::new(remote))
            .map_err(|e| transfer_error(e.into()))?;
        let bytes = io::copy(&mut input, &mut output).map_err(transfer_error)?;

        debug!(local = %local.display(), remote, bytes, "uploaded");
        Ok(bytes)
    }

    fn close(&mut self) -> TransportResult<()> {
        if self.sftp.take().is_none() {
            return Ok(());
        }
        self.session
            .disconnect(None, "submission finished", None)
            .map_err(|e| TransportError::Sftp { source: e.into() })?;
        debug!("session closed");
        Ok(())
    }
}
