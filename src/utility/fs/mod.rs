// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  list_matching()  ignore::Walk, depth 1, no filters
//!                         wax glob on the file name
//!                         sorted by name
//! ```

pub mod walk;
