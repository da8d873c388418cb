// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Zip packing of submission bundles.
//!
//! ```text
//! PackerTool
//! Builder: source_dir/pattern/archive
//!
//! list_matching(source_dir, pattern)      depth 1, sorted
//!        |
//!        v
//! NamedTempFile (next to archive) --> ZipWriter, deflate
//!        |   entry name = file name only
//!        v
//! persist(archive)                        replaces old archive
//! ```
//!
//! Fixed bundles: `*.py` --> `app.zip`, `*.csv` --> `data.zip`.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use futures_util::future::BoxFuture;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{Tool, ToolContext};
use crate::error::{ArchiveError, OdcError, Result};
use crate::utility::fs::walk::list_matching;

/// Archive holding the Python sources.
pub const APP_ARCHIVE: &str = "app.zip";
/// Archive holding the data files.
pub const DATA_ARCHIVE: &str = "data.zip";
/// Files bundled into [`APP_ARCHIVE`].
pub const PYTHON_PATTERN: &str = "*.py";
/// Files bundled into [`DATA_ARCHIVE`].
pub const DATA_PATTERN: &str = "*.csv";

/// Zip tool bundling the matching files of one directory.
///
/// # Example
///
/// ```ignore
/// let tool = PackerTool::new()
///     .source_dir("app")
///     .pattern(PYTHON_PATTERN)
///     .archive(APP_ARCHIVE);
///
/// tool.run(&ctx).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackerTool {
    source_dir: Option<PathBuf>,
    pattern: Option<String>,
    archive: Option<PathBuf>,
}

impl PackerTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source_dir: None,
            pattern: None,
            archive: None,
        }
    }

    #[must_use]
    pub fn source_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn archive(mut self, path: impl AsRef<Path>) -> Self {
        self.archive = Some(path.as_ref().to_path_buf());
        self
    }

    fn archive_required(&self) -> Result<&Path> {
        self.archive
            .as_deref()
            .context("PackerTool: archive path is required")
    }

    fn source_dir_required(&self) -> Result<&Path> {
        self.source_dir
            .as_deref()
            .context("PackerTool: source directory is required")
    }

    fn pattern_required(&self) -> Result<&str> {
        self.pattern
            .as_deref()
            .context("PackerTool: pattern is required")
    }

    async fn pack(&self, ctx: &ToolContext) -> Result<()> {
        let archive = self.archive_required()?.to_path_buf();
        let source_dir = self.source_dir_required()?.to_path_buf();
        let pattern = self.pattern_required()?.to_string();

        if ctx.is_dry_run() {
            info!(
                archive = %archive.display(),
                source_dir = %source_dir.display(),
                pattern = %pattern,
                "[dry-run] Would create zip archive"
            );
            return Ok(());
        }

        let written = tokio::task::spawn_blocking(move || {
            zip_matching(&source_dir, &pattern, &archive)
        })
        .await
        .context("zip task panicked")??;

        info!(archive = %written.display(), "Archive created successfully");
        Ok(())
    }
}

impl Tool for PackerTool {
    fn name(&self) -> &'static str {
        "packer"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.pack(ctx))
    }
}

/// Zips every file in `source_dir` whose name matches `pattern` into `output`.
///
/// Entries are stored under their base name only, deflate-compressed, in
/// file-name order. An existing `output` is replaced. No matches still
/// produce a valid, empty archive.
///
/// # Errors
///
/// Returns an error if:
/// - `source_dir` does not exist ([`ArchiveError::SourceMissing`]).
/// - `pattern` is not a valid glob ([`ArchiveError::InvalidPattern`]).
/// - Reading a source file or writing the archive fails.
pub fn zip_matching(source_dir: &Path, pattern: &str, output: &Path) -> Result<PathBuf> {
    let files = list_matching(source_dir, pattern)?;
    debug!(
        source_dir = %source_dir.display(),
        pattern,
        file_count = files.len(),
        "Creating zip archive"
    );

    let parent = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let temp = NamedTempFile::new_in(parent).map_err(|e| io_error(parent, e))?;

    let mut writer = ZipWriter::new(temp);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in &files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let name = name.to_string_lossy().into_owned();

        writer
            .start_file(name, options)
            .map_err(|e| zip_error(output, e))?;
        let mut input = File::open(file).map_err(|e| io_error(file, e))?;
        io::copy(&mut input, &mut writer).map_err(|e| io_error(file, e))?;
    }

    let temp = writer.finish().map_err(|e| zip_error(output, e))?;
    temp.persist(output).map_err(|e| io_error(output, e.error))?;

    Ok(output.to_path_buf())
}

fn io_error(path: &Path, source: io::Error) -> OdcError {
    OdcError::from(ArchiveError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn zip_error(path: &Path, source: zip::result::ZipError) -> OdcError {
    OdcError::from(ArchiveError::Zip {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests;
