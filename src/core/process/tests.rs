// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::ProcessBuilder;
use crate::error::ProcessError;

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_success() {
    ProcessBuilder::new("sh")
        .args(["-c", "exit 0"])
        .run()
        .await
        .expect("process should succeed");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_non_zero_exit_is_error() {
    let err = ProcessBuilder::new("sh")
        .args(["-c", "exit 42"])
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessError::NonZeroExit { code: 42, .. }));
    insta::assert_snapshot!(err.to_string(), @"process 'sh -c \"exit 42\"' exited with code 42");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_runs_in_cwd() {
    let temp = tempfile::tempdir().unwrap();

    ProcessBuilder::new("touch")
        .arg("marker.txt")
        .cwd(temp.path())
        .run()
        .await
        .expect("touch should succeed");

    assert!(temp.path().join("marker.txt").is_file());
}

#[tokio::test]
async fn test_process_spawn_failure() {
    let err = ProcessBuilder::new("/nonexistent/program_12345")
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, ProcessError::SpawnFailed { .. }));
}

#[test]
fn test_which_not_found() {
    let program = "nonexistent_program_12345";
    let err = ProcessBuilder::which(program, ".").unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains(program), "error should mention the program: {msg}");
}

#[cfg(not(windows))]
#[test]
fn test_which_sets_display_name() {
    let builder = ProcessBuilder::which("sh", ".").unwrap();
    assert!(builder.program().is_absolute());
    assert_eq!(builder.name_override(), Some("sh"));
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("mvn").args(["clean", "-Dname=with space"]);
    assert_eq!(builder.command_line(), "mvn clean \"-Dname=with space\"");
}
