// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project kind detection.
//!
//! ```text
//! classify(cwd, python_dir)
//!   cwd/pom.xml       file?  --> Java
//!   cwd/<python_dir>  dir?   --> PythonAppDir(path)
//!   cwd/main.py       file?  --> PythonSingleFile
//!   otherwise                --> Unknown
//! ```
//!
//! The probes run in this order; the first hit wins.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Maven project descriptor marking a Java project.
pub const BUILD_MANIFEST: &str = "pom.xml";

/// Default directory holding a multi-file Python application.
pub const DEFAULT_PYTHON_DIR: &str = "app";

/// Entry point of a single-file Python project.
pub const ENTRY_POINT: &str = "main.py";

/// Kind of project found in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectKind {
    /// Maven project; submitted as a built jar.
    Java,
    /// Python application living in its own directory.
    PythonAppDir(PathBuf),
    /// Python project with a top-level `main.py`.
    PythonSingleFile,
    /// None of the markers were found.
    Unknown,
}

impl ProjectKind {
    /// Directory whose Python sources make up the application bundle.
    ///
    /// Returns `None` for non-Python kinds.
    #[must_use]
    pub fn python_source_dir(&self, cwd: &Path) -> Option<PathBuf> {
        match self {
            Self::PythonAppDir(dir) => Some(dir.clone()),
            Self::PythonSingleFile => Some(cwd.to_path_buf()),
            Self::Java | Self::Unknown => None,
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Java => write!(f, "Java (Maven)"),
            Self::PythonAppDir(dir) => write!(f, "Python ({})", dir.display()),
            Self::PythonSingleFile => write!(f, "Python ({ENTRY_POINT})"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classifies the project in `cwd`.
///
/// `python_dir` is resolved against `cwd` unless absolute. Only the
/// filesystem is probed; nothing is created or modified.
#[must_use]
pub fn classify(cwd: &Path, python_dir: &Path) -> ProjectKind {
    let kind = if cwd.join(BUILD_MANIFEST).is_file() {
        ProjectKind::Java
    } else if cwd.join(python_dir).is_dir() {
        ProjectKind::PythonAppDir(cwd.join(python_dir))
    } else if cwd.join(ENTRY_POINT).is_file() {
        ProjectKind::PythonSingleFile
    } else {
        ProjectKind::Unknown
    };

    debug!(cwd = %cwd.display(), kind = %kind, "classified project");
    kind
}
