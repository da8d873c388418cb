// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{split_command, BuildTool};
use crate::error::{exit_status, BuildError, OdcError, ProcessError, EXIT_BUILD_FAILED};
use crate::tools::test_utils::run_with_logs;
use crate::tools::{Tool, ToolContext};

fn build_error(err: &anyhow::Error) -> &BuildError {
    match err.downcast_ref::<OdcError>() {
        Some(OdcError::Build(e)) => &**e,
        other => panic!("expected build error, got {other:?}"),
    }
}

#[test]
fn test_split_command_default() {
    insta::assert_debug_snapshot!(split_command("mvn clean package"), @r#"
    [
        "mvn",
        "clean",
        "package",
    ]
    "#);
}

#[test]
fn test_split_command_collapses_whitespace() {
    assert_eq!(
        split_command("  gradle \t build\n --quiet "),
        vec!["gradle", "build", "--quiet"]
    );
}

#[test]
fn test_split_command_empty() {
    assert!(split_command("   ").is_empty());
}

#[test]
fn test_build_tool_name() {
    assert_eq!(BuildTool::new("mvn").name(), "build");
}

#[tokio::test]
async fn test_empty_command_fails() {
    let err = BuildTool::new("  ")
        .run(&ToolContext::default())
        .await
        .unwrap_err();

    assert!(matches!(build_error(&err), BuildError::EmptyCommand));
    assert_eq!(exit_status(&err), EXIT_BUILD_FAILED);
}

#[tokio::test]
async fn test_unknown_program_fails() {
    let temp = tempfile::tempdir().unwrap();
    let err = BuildTool::new("nonexistent_build_tool_12345 package")
        .cwd(temp.path())
        .run(&ToolContext::default())
        .await
        .unwrap_err();

    assert!(matches!(
        build_error(&err),
        BuildError::Process(ProcessError::ExecutableNotFound { .. })
    ));
    assert_eq!(exit_status(&err), EXIT_BUILD_FAILED);
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_successful_build_runs_in_cwd() {
    let temp = tempfile::tempdir().unwrap();
    BuildTool::new("touch built.marker")
        .cwd(temp.path())
        .run(&ToolContext::default())
        .await
        .unwrap();

    assert!(temp.path().join("built.marker").is_file());
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_failing_build_reports_exit_code() {
    let temp = tempfile::tempdir().unwrap();
    let err = BuildTool::new("false")
        .cwd(temp.path())
        .run(&ToolContext::default())
        .await
        .unwrap_err();

    match build_error(&err) {
        BuildError::Failed { command, code } => {
            assert_eq!(command, "false");
            assert_eq!(*code, 1);
        }
        other => panic!("unexpected: {other:?}"),
    }
    insta::assert_snapshot!(
        err.to_string(),
        @"Failed to build package: `false` exited with code 1"
    );
}

#[tokio::test]
async fn test_dry_run_does_not_execute() {
    let temp = tempfile::tempdir().unwrap();
    let tool = BuildTool::new("nonexistent_build_tool_12345 package").cwd(temp.path());
    let ctx = ToolContext::new(true);

    let logs = run_with_logs(|| tool.run(&ctx)).await.unwrap();

    assert!(logs.contains("[dry-run] Would run build command"));
    assert!(logs.contains("nonexistent_build_tool_12345 package"));
}
