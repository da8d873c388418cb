// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> options struct --> cmd::run_* handlers
//!   init    InitOptions   --> odc.json, .gitignore
//!   submit  SubmitOptions --> build/zip --> upload
//! ```

pub mod init;
pub mod submit;
