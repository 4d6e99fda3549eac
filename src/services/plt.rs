// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PLT trajectory file parsing.
//!
//! PLT files open with a fixed 6-line header followed by one comma-separated
//! trackpoint row per line:
//!
//! ```text
//! lat,lon,0,altitude,date_days,date,time
//! ```

use crate::error::{IngestError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of header lines before the first data row.
pub(crate) const HEADER_LINES: usize = 6;

/// Files with more data rows than this are skipped outright.
pub const MAX_TRACKPOINTS: usize = 2500;

/// One raw PLT row, split into its used positional fields.
///
/// Fields stay unparsed strings here; the formatter owns the conversion to
/// typed values. The third PLT column is always zero and is dropped.
#[derive(Debug, Clone)]
pub struct RawTrackPoint {
    pub latitude: String,
    pub longitude: String,
    pub altitude: String,
    pub date_days: String,
    pub date: String,
    pub time: String,
}

/// Read one PLT file into raw rows.
///
/// Returns `Ok(None)` when the file holds more than [`MAX_TRACKPOINTS`] data
/// rows; the caller treats that as a skip, not an error. An oversized file is
/// abandoned the moment the cap is hit, so a truncated prefix is never
/// returned. A missing or unreadable file is an error.
pub fn read_plt(path: &Path) -> Result<Option<Vec<RawTrackPoint>>> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if index < HEADER_LINES {
            continue;
        }
        if rows.len() == MAX_TRACKPOINTS {
            tracing::debug!(path = %path.display(), "Skipping oversized trajectory file");
            return Ok(None);
        }
        rows.push(parse_row(&line, path, index + 1)?);
    }
    Ok(Some(rows))
}

/// Split one data line into a [`RawTrackPoint`].
fn parse_row(line: &str, path: &Path, line_number: usize) -> Result<RawTrackPoint> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() < 7 {
        return Err(IngestError::MalformedRow {
            path: path.to_path_buf(),
            line: line_number,
            message: format!("expected 7 fields, found {}", fields.len()),
        });
    }
    Ok(RawTrackPoint {
        latitude: fields[0].to_string(),
        longitude: fields[1].to_string(),
        altitude: fields[3].to_string(),
        date_days: fields[4].to_string(),
        date: fields[5].to_string(),
        time: fields[6].to_string(),
    })
}
