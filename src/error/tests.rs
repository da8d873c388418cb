// odc-client: ODC Server Submission Client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    BuildError, ConfigError, EXIT_BUILD_FAILED, EXIT_CONFIG_EXISTS, EXIT_CONFIG_INVALID,
    EXIT_FAILURE, EXIT_TRANSPORT, EXIT_UNCLASSIFIABLE, OdcError, OdcResult, ProjectError,
    TransportError, exit_status,
};
use anyhow::Context;

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingField { field: "password" };
    insta::assert_snapshot!(err.to_string(), @"Could not find a password. Don't forget to run `init`");
}

#[test]
fn test_already_exists_display() {
    let err = ConfigError::AlreadyExists {
        path: "odc.json".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"File odc.json already exists. Use the --force option to overwrite it."
    );
}

#[test]
fn test_odc_error_size() {
    // One thin Box per variant plus the discriminant.
    let size = std::mem::size_of::<OdcError>();
    assert!(size <= 24, "OdcError is {size} bytes, expected <= 24");
}

#[test]
fn test_odc_result_size() {
    let size = std::mem::size_of::<OdcResult<()>>();
    assert!(size <= 24, "OdcResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_exit_statuses_are_distinct() {
    let errors: Vec<OdcError> = vec![
        ConfigError::NotFound {
            path: "odc.json".to_string(),
        }
        .into(),
        ConfigError::AlreadyExists {
            path: "odc.json".to_string(),
        }
        .into(),
        ProjectError::Unclassifiable {
            dir: ".".to_string(),
        }
        .into(),
        BuildError::Failed {
            command: "mvn clean package".to_string(),
            code: 1,
        }
        .into(),
        TransportError::Sftp {
            source: std::io::Error::other("boom"),
        }
        .into(),
    ];

    let statuses: Vec<u8> = errors.iter().map(OdcError::exit_status).collect();
    assert_eq!(
        statuses,
        vec![
            EXIT_CONFIG_INVALID,
            EXIT_CONFIG_EXISTS,
            EXIT_UNCLASSIFIABLE,
            EXIT_BUILD_FAILED,
            EXIT_TRANSPORT,
        ]
    );

    let mut deduped = statuses.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), statuses.len());
    assert!(!statuses.contains(&EXIT_FAILURE));
}

#[test]
fn test_exit_status_through_context() {
    let result: anyhow::Result<()> = Err(OdcError::from(ConfigError::MissingField {
        field: "port",
    }))
    .context("loading credentials");

    let err = result.unwrap_err();
    assert_eq!(exit_status(&err), EXIT_CONFIG_INVALID);
}

#[test]
fn test_exit_status_bare_sub_error() {
    let err = anyhow::Error::new(TransportError::Connect {
        host: "localhost".to_string(),
        port: 222,
        source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
    });
    assert_eq!(exit_status(&err), EXIT_TRANSPORT);
}

#[test]
fn test_exit_status_unknown_error() {
    let err = anyhow::anyhow!("something else");
    assert_eq!(exit_status(&err), EXIT_FAILURE);
}
