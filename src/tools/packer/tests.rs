// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use super::{zip_matching, PackerTool, APP_ARCHIVE, DATA_PATTERN, PYTHON_PATTERN};
use crate::error::{ArchiveError, OdcError};
use crate::tools::test_utils::run_with_logs;
use crate::tools::{Tool, ToolContext};

fn entry_names(archive: &Path) -> Vec<String> {
    let mut zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect()
}

fn entry_contents(archive: &Path, name: &str) -> String {
    let mut zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut out = String::new();
    zip.by_name(name).unwrap().read_to_string(&mut out).unwrap();
    out
}

#[test]
fn test_packer_tool_builder() {
    let tool = PackerTool::new()
        .source_dir("app")
        .pattern(PYTHON_PATTERN)
        .archive(APP_ARCHIVE);

    assert_eq!(tool.name(), "packer");
    assert_eq!(tool.source_dir_required().unwrap(), Path::new("app"));
    assert_eq!(tool.pattern_required().unwrap(), "*.py");
    assert_eq!(tool.archive_required().unwrap(), Path::new("app.zip"));
}

#[test]
fn test_packer_tool_missing_settings() {
    let tool = PackerTool::default();
    assert!(tool.archive_required().is_err());
    assert!(tool.source_dir_required().is_err());
    assert!(tool.pattern_required().is_err());
}

#[test]
fn test_zip_matching_selects_pattern() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("b.py"), "print('b')").unwrap();
    fs::write(temp.path().join("a.py"), "print('a')").unwrap();
    fs::write(temp.path().join("c.csv"), "x,y").unwrap();

    let output = temp.path().join(APP_ARCHIVE);
    let written = zip_matching(temp.path(), PYTHON_PATTERN, &output).unwrap();

    assert_eq!(written, output);
    assert_eq!(entry_names(&output), vec!["a.py", "b.py"]);
    assert_eq!(entry_contents(&output, "a.py"), "print('a')");
}

#[test]
fn test_zip_matching_flattens_and_skips_subdirs() {
    let temp = tempfile::tempdir().unwrap();
    let src = temp.path().join("app");
    fs::create_dir_all(src.join("pkg")).unwrap();
    fs::write(src.join("main.py"), "").unwrap();
    fs::write(src.join("pkg").join("nested.py"), "").unwrap();

    let output = temp.path().join("out.zip");
    zip_matching(&src, PYTHON_PATTERN, &output).unwrap();

    assert_eq!(entry_names(&output), vec!["main.py"]);
}

#[test]
fn test_zip_matching_no_matches_is_empty_archive() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("main.py"), "").unwrap();

    let output = temp.path().join("data.zip");
    zip_matching(temp.path(), DATA_PATTERN, &output).unwrap();

    assert!(output.is_file());
    assert!(entry_names(&output).is_empty());
}

#[test]
fn test_zip_matching_replaces_existing_archive() {
    let temp = tempfile::tempdir().unwrap();
    let output = temp.path().join("data.zip");
    fs::write(&output, "not a zip").unwrap();
    fs::write(temp.path().join("points.csv"), "1,2").unwrap();

    zip_matching(temp.path(), DATA_PATTERN, &output).unwrap();

    assert_eq!(entry_names(&output), vec!["points.csv"]);
}

#[test]
fn test_zip_matching_missing_source() {
    let temp = tempfile::tempdir().unwrap();
    let err = zip_matching(
        &temp.path().join("missing"),
        PYTHON_PATTERN,
        &temp.path().join("app.zip"),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<OdcError>(),
        Some(OdcError::Archive(e)) if matches!(**e, ArchiveError::SourceMissing(_))
    ));
    assert!(!temp.path().join("app.zip").exists());
}

#[tokio::test]
async fn test_packer_tool_writes_archive() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("main.py"), "").unwrap();
    let output = temp.path().join(APP_ARCHIVE);

    PackerTool::new()
        .source_dir(temp.path())
        .pattern(PYTHON_PATTERN)
        .archive(&output)
        .run(&ToolContext::default())
        .await
        .unwrap();

    assert_eq!(entry_names(&output), vec!["main.py"]);
}

#[tokio::test]
async fn test_packer_tool_dry_run_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("main.py"), "").unwrap();
    let output = temp.path().join(APP_ARCHIVE);
    let tool = PackerTool::new()
        .source_dir(temp.path())
        .pattern(PYTHON_PATTERN)
        .archive(&output);
    let ctx = ToolContext::new(true);

    let logs = run_with_logs(|| tool.run(&ctx)).await.unwrap();

    assert!(logs.contains("[dry-run] Would create zip archive"));
    assert!(!output.exists());
}
