// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use geolife_ingest::store::{kinds, StoreError};
use geolife_ingest::IngestError;
use std::path::PathBuf;

#[test]
fn test_fatal_errors_carry_diagnostic_context() {
    let err = IngestError::NoTrajectoryFiles("163".to_string());
    assert_eq!(err.to_string(), "No trajectory files found for user 163");

    let err = IngestError::MalformedRow {
        path: PathBuf::from("/data/Data/163/Trajectory/20081023025304.plt"),
        line: 12,
        message: "expected 7 fields, found 2".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("20081023025304.plt"), "got: {}", message);
    assert!(message.contains("line 12"), "got: {}", message);

    let err = IngestError::EmptyTrajectory(PathBuf::from("empty.plt"));
    assert!(err.to_string().contains("empty.plt"));
}

#[test]
fn test_io_errors_keep_the_offending_path() {
    let err = IngestError::Io {
        path: PathBuf::from("/data/labeled_ids.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let message = err.to_string();
    assert!(message.contains("labeled_ids.txt"), "got: {}", message);
    assert!(message.contains("no such file"), "got: {}", message);
}

#[test]
fn test_internal_errors_wrap_anyhow() {
    let err: IngestError = anyhow::anyhow!("unexpected dataset state").into();
    assert!(err.to_string().contains("unexpected dataset state"));
}

#[test]
fn test_store_errors_convert_into_ingest_errors() {
    let store_err = StoreError::Insert {
        kind: kinds::TRACKPOINT,
        message: "connection reset".to_string(),
    };
    let err: IngestError = store_err.into();
    let message = err.to_string();
    assert!(message.starts_with("Storage error"), "got: {}", message);
    assert!(message.contains("trackpoint"), "got: {}", message);
}
