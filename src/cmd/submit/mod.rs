// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submit command implementation.
//!
//! ```text
//! classify(work_dir)
//!   |
//!   +-- Unknown ---------> ProjectError::Unclassifiable
//!   +-- Java ------------> [BuildTool] --> jar must exist
//!   +-- Python ----------> PackerTool *.py (python_source_dir) --> app.zip
//!   |
//! [PackerTool *.csv (data path) --> data.zip]
//!   |
//! Credentials::load(odc.json)
//!   |
//! Transport::open --> SessionGuard --> put primary --> [put data] --> close
//! ```
//!
//! Every step prints one progress line to stdout before it runs. Nothing is
//! uploaded unless every local step succeeded.

use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, info, warn};

use crate::config::{CONFIG_FILE_NAME, Credentials};
use crate::error::{BuildError, OdcError, ProjectError, Result};
use crate::net::{RemoteDestination, SessionGuard, Transport};
use crate::project::{self, DEFAULT_PYTHON_DIR, ProjectKind};
use crate::tools::build::{BuildTool, DEFAULT_BUILD_COMMAND};
use crate::tools::packer::{
    APP_ARCHIVE, DATA_ARCHIVE, DATA_PATTERN, PYTHON_PATTERN, PackerTool,
};
use crate::tools::{Tool, ToolContext};

/// Default remote directory, relative to the remote root.
pub const DEFAULT_REMOTE_DIR: &str = ".";

/// Default location of the built jar, relative to the working directory.
pub const DEFAULT_JAR_PATH: &str = "target/app.jar";

/// Options for a single submission.
#[derive(Debug, Clone, Builder)]
pub struct SubmitOptions {
    /// Project directory; markers, bundles and `odc.json` live here.
    #[builder(setters(name = with_work_dir), into, default = PathBuf::from("."))]
    pub work_dir: PathBuf,
    #[builder(setters(name = with_remote_dir), into, default = PathBuf::from(DEFAULT_REMOTE_DIR))]
    pub remote_dir: PathBuf,
    #[builder(setters(name = with_skip_build), default = false)]
    pub skip_build: bool,
    #[builder(setters(name = with_build_command), into, default = DEFAULT_BUILD_COMMAND.to_string())]
    pub build_command: String,
    /// Relative to `work_dir` unless absolute.
    #[builder(setters(name = with_jar_path), into, default = PathBuf::from(DEFAULT_JAR_PATH))]
    pub jar_path: PathBuf,
    /// Relative to `work_dir` unless absolute.
    #[builder(setters(name = with_python_dir), into, default = PathBuf::from(DEFAULT_PYTHON_DIR))]
    pub python_dir: PathBuf,
    /// Directory holding the `*.csv` files; `work_dir` when unset.
    #[builder(setters(name = with_data_path), into)]
    pub data_path: Option<PathBuf>,
    #[builder(setters(name = with_skip_data), default = false)]
    pub skip_data: bool,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SubmitOptions {
    fn config_path(&self) -> PathBuf {
        self.work_dir.join(CONFIG_FILE_NAME)
    }

    fn data_dir(&self) -> PathBuf {
        self.data_path
            .as_ref()
            .map_or_else(|| self.work_dir.clone(), |p| self.work_dir.join(p))
    }
}

/// One bundle sent (or, in dry-run, planned) to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub local: PathBuf,
    pub remote: String,
    /// Bytes transferred; `None` when nothing was sent.
    pub bytes: Option<u64>,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub kind: ProjectKind,
    pub built: bool,
    pub uploads: Vec<Upload>,
}

/// Main handler for the submit command.
///
/// # Errors
///
/// Returns an error if:
/// - The project kind cannot be determined.
/// - The build fails or the jar is missing afterwards.
/// - An archive cannot be written.
/// - `odc.json` is missing or incomplete.
/// - Connecting, authenticating or uploading fails.
pub async fn run_submit<T: Transport>(
    options: &SubmitOptions,
    ctx: &ToolContext,
    transport: &T,
) -> Result<SubmitReport> {
    let work_dir = options.work_dir.as_path();
    println!("Detecting project type...");
    let kind = project::classify(work_dir, &options.python_dir);
    info!(kind = %kind, work_dir = %work_dir.display(), "detected project");

    if kind == ProjectKind::Unknown {
        return Err(OdcError::from(ProjectError::Unclassifiable {
            dir: work_dir.display().to_string(),
        })
        .into());
    }

    let mut built = false;
    let primary = if let Some(source) = kind.python_source_dir(work_dir) {
        if matches!(kind, ProjectKind::PythonAppDir(_)) {
            println!("Zipping {} directory...", options.python_dir.display());
        } else {
            println!("Zipping {PYTHON_PATTERN} files...");
        }
        pack(ctx, &source, PYTHON_PATTERN, &work_dir.join(APP_ARCHIVE)).await?
    } else {
        let jar = work_dir.join(&options.jar_path);
        if options.skip_build {
            println!("Skipping build, using {}...", options.jar_path.display());
        } else {
            println!("Running `{}`...", options.build_command.trim());
            BuildTool::new(&options.build_command)
                .cwd(work_dir)
                .run(ctx)
                .await?;
            built = true;
        }
        locate_jar(&jar, ctx)?
    };

    let mut bundles = vec![primary];
    if options.skip_data {
        debug!("data bundle skipped");
    } else {
        println!("Zipping data files...");
        let data = pack(
            ctx,
            &options.data_dir(),
            DATA_PATTERN,
            &work_dir.join(DATA_ARCHIVE),
        )
        .await?;
        bundles.push(data);
    }

    println!("Reading {CONFIG_FILE_NAME}...");
    let credentials = Credentials::load(options.config_path())?;
    let destination = RemoteDestination::new(&options.remote_dir);
    debug!(remote_dir = destination.dir(), "resolved remote destination");
    let planned: Vec<(PathBuf, String)> = bundles
        .into_iter()
        .map(|local| {
            let remote = destination.file(&file_name(&local));
            (local, remote)
        })
        .collect();

    let uploads = if ctx.is_dry_run() {
        for (local, remote) in &planned {
            info!(
                local = %local.display(),
                remote = %remote,
                host = %credentials.hostname,
                "[dry-run] Would upload"
            );
        }
        planned
            .into_iter()
            .map(|(local, remote)| Upload {
                local,
                remote,
                bytes: None,
            })
            .collect()
    } else {
        upload_all(transport, &credentials, planned)?
    };

    println!("Done!");
    Ok(SubmitReport {
        kind,
        built,
        uploads,
    })
}

/// Opens one session, uploads every bundle in order and closes it.
///
/// The session is closed on every path once it has been opened. A close
/// failure after the last upload is only logged.
fn upload_all<T: Transport>(
    transport: &T,
    credentials: &Credentials,
    planned: Vec<(PathBuf, String)>,
) -> Result<Vec<Upload>> {
    println!("Connecting to server...");
    let mut session = SessionGuard::new(transport.open(credentials).map_err(OdcError::from)?);

    let mut uploads = Vec::with_capacity(planned.len());
    for (local, remote) in planned {
        println!("Uploading {}...", file_name(&local));
        let bytes = session.put(&local, &remote).map_err(OdcError::from)?;
        info!(local = %local.display(), remote = %remote, bytes, "uploaded");
        uploads.push(Upload {
            local,
            remote,
            bytes: Some(bytes),
        });
    }

    // Every bundle is on the server; a failed disconnect does not undo that.
    if let Err(e) = session.close() {
        warn!(error = %e, "failed to close remote session");
    }
    Ok(uploads)
}

async fn pack(ctx: &ToolContext, source: &Path, pattern: &str, archive: &Path) -> Result<PathBuf> {
    PackerTool::new()
        .source_dir(source)
        .pattern(pattern)
        .archive(archive)
        .run(ctx)
        .await?;
    Ok(archive.to_path_buf())
}

fn locate_jar(jar: &Path, ctx: &ToolContext) -> Result<PathBuf> {
    if !ctx.is_dry_run() && !jar.is_file() {
        return Err(OdcError::from(BuildError::ArtifactMissing {
            path: jar.display().to_string(),
        })
        .into());
    }
    Ok(jar.to_path_buf())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
