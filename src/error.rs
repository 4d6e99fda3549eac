// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ingestion error types.
//!
//! Anything surfaced through this enum aborts the run; tolerated conditions
//! (oversized trajectory files, label lookup misses) and reported bulk-chunk
//! failures never become an [`IngestError`].

use crate::services::format::FormatError;
use crate::store::StoreError;
use std::path::PathBuf;

/// Fatal ingestion error, carrying enough context (user ID, path, line) to
/// diagnose which part of the dataset broke the run.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No trajectory files found for user {0}")]
    NoTrajectoryFiles(String),

    #[error("Trajectory file {0} contains no trackpoint rows")]
    EmptyTrajectory(PathBuf),

    #[error("Malformed trackpoint row ({path} line {line}): {message}")]
    MalformedRow {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Malformed label row ({path} line {line}): {message}")]
    MalformedLabel {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Bad trackpoint data in {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
