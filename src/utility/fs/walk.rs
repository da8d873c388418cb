// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{ArchiveError, OdcError, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use wax::{Glob, Pattern};

/// Builds a single-level, unfiltered `WalkBuilder` sorted by file name.
///
/// Every `ignore` filter is off: hidden and git-ignored files are still
/// candidates, only the glob decides.
fn build_walker(root: &Path) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .max_depth(Some(1))
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder
}

/// Lists regular files directly inside `root` whose name matches `pattern`.
///
/// Uses `wax` for the glob and `ignore::Walk` for enumeration. Subdirectories
/// are not descended into. Results are sorted by file name, so archives built
/// from them are reproducible.
///
/// # Errors
///
/// Returns an error if:
/// - `root` is not a directory ([`ArchiveError::SourceMissing`]).
/// - The glob pattern is invalid ([`ArchiveError::InvalidPattern`]).
///
/// # Example
/// ```no_run
/// use odc_client::utility::fs::walk::list_matching;
///
/// let sources = list_matching("app", "*.py")?;
/// for file in sources {
///     println!("{}", file.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn list_matching<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(OdcError::from(ArchiveError::SourceMissing(root.display().to_string())).into());
    }

    let glob = Glob::new(pattern).map_err(|e| {
        OdcError::from(ArchiveError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
    })?;

    let mut matches = Vec::new();
    for entry in build_walker(root).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "walk error");
                continue;
            }
        };

        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if glob.is_match(Path::new(entry.file_name())) {
            trace!(path = %entry.path().display(), pattern, "matched");
            matches.push(entry.into_path());
        }
    }

    Ok(matches)
}
