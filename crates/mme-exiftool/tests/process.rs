//! Output classification of real child processes standing in for exiftool.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use mme_exiftool::{ExifTool, MetadataTool, ToolConfig, ToolError};
use mme_model::{OperationOutcome, Standard};
use tempfile::TempDir;

fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn silent_tool_is_an_anomaly() {
    let mut tool = ExifTool::new(ToolConfig::default().with_program("true"));
    let err = tool
        .write_tag(Standard::Dc, "XMP-dc:Title", "Foo", Path::new("a.jpg"))
        .unwrap_err();

    match err {
        ToolError::Anomaly { action, path } => {
            assert_eq!(action, "WRITE DC TAGS");
            assert_eq!(path, PathBuf::from("a.jpg"));
        }
        other => panic!("expected anomaly, got {other:?}"),
    }
}

#[test]
fn silent_delete_is_an_anomaly() {
    let mut tool = ExifTool::new(ToolConfig::default().with_program("true"));
    let err = tool
        .delete_namespace(Standard::Vrae, Path::new("a.jpg"))
        .unwrap_err();
    assert!(matches!(err, ToolError::Anomaly { .. }));
}

#[test]
fn error_channel_is_a_failure() {
    let dir = TempDir::new().unwrap();
    let program = script(
        &dir,
        "warns",
        "echo 'Warning: Tag is not defined' >&2\necho 'Nothing to do.' >&2",
    );
    let mut tool = ExifTool::new(ToolConfig::default().with_program(program));

    let outcome = tool
        .write_tag(Standard::Dc, "XMP-dc:Bogus", "x", Path::new("a.jpg"))
        .unwrap();

    assert_eq!(
        outcome,
        OperationOutcome::Failure("Warning: Tag is not defined|Nothing to do.|".to_string())
    );
}

#[test]
fn output_channel_is_prettified_success() {
    let dir = TempDir::new().unwrap();
    let program = script(
        &dir,
        "rewrites",
        "echo 'Rewriting a.jpg...'\necho '    1 image files updated'",
    );
    let mut tool = ExifTool::new(ToolConfig::default().with_program(program));

    let outcome = tool
        .delete_namespace(Standard::Isadg, Path::new("a.jpg"))
        .unwrap();

    assert!(outcome.is_success());
    assert_eq!(
        outcome,
        OperationOutcome::Success("REWRITING: a.jpg...|    1 image files updated|".to_string())
    );
}
