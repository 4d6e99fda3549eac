// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transportation-mode label handling.
//!
//! Each labeled user ships a tab-separated `labels.txt` of
//! `start <TAB> end <TAB> mode` rows under its directory. Lookup is exact
//! (start, end) equality; no range or nearest matching is performed.

use crate::error::{IngestError, Result};
use crate::time_utils;
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Exact-match index from activity bounds to transportation mode.
///
/// Built fresh per user; never cached across users.
#[derive(Debug, Default, Clone)]
pub struct LabelIndex {
    entries: HashMap<(NaiveDateTime, NaiveDateTime), String>,
}

impl LabelIndex {
    /// Load a user's label file. The first line is a header and is skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse label file content. `path` is only used for error context.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut entries = HashMap::new();
        for (index, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 3 {
                return Err(IngestError::MalformedLabel {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message: format!("expected 3 tab-separated fields, found {}", fields.len()),
                });
            }
            let start = parse_bound(fields[0], path, index + 1)?;
            let end = parse_bound(fields[1], path, index + 1)?;
            entries.insert((start, end), fields[2].trim().to_string());
        }
        tracing::debug!(path = %path.display(), count = entries.len(), "Loaded label index");
        Ok(Self { entries })
    }

    /// Look up the mode for exact activity bounds.
    pub fn get(&self, start: NaiveDateTime, end: NaiveDateTime) -> Option<&str> {
        self.entries.get(&(start, end)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_bound(value: &str, path: &Path, line: usize) -> Result<NaiveDateTime> {
    time_utils::parse_label_timestamp(value.trim()).map_err(|e| IngestError::MalformedLabel {
        path: path.to_path_buf(),
        line,
        message: format!("bad timestamp '{}': {}", value, e),
    })
}

/// Load the manifest of label-bearing user IDs, one per line.
pub fn read_labeled_ids(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
