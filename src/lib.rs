// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |               init / submit
//!                +----------+----------+
//!                           v
//!       ,-------------+-----------+-------------,
//!       |             |           |             |
//!       v             v           v             v
//!    config        project      tools          net
//!   odc.json      classify   build/packer   Transport
//!   .gitignore               (zip, mvn)    SFTP (ssh2)
//!                                |
//!   +----------------------------+------------+
//!   |  core   process (tokio, which)          |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod net;
pub mod project;
pub mod tools;
pub mod utility;
