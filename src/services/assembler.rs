// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user activity assembly.
//!
//! Handles the per-user part of the pipeline:
//! 1. Enumerate the user's trajectory files
//! 2. Parse each file, skipping oversized ones
//! 3. Derive activity bounds from the first and last rows
//! 4. Resolve the transportation-mode label by exact bounds match
//! 5. Emit one (activity, trackpoints) bundle per kept file

use crate::error::{IngestError, Result};
use crate::models::{Activity, TrackPoint};
use crate::services::format;
use crate::services::labels::LabelIndex;
use crate::services::plt::{self, RawTrackPoint};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user trajectory subdirectory.
const TRAJECTORY_DIR: &str = "Trajectory";

/// Name of the per-user label file.
const LABELS_FILE: &str = "labels.txt";

/// One activity draft plus its formatted trackpoints.
///
/// Neither carries identifiers yet; the driver assigns or collects them at
/// persistence time depending on the ID strategy.
#[derive(Debug)]
pub struct ActivityBundle {
    pub activity: Activity,
    pub trackpoints: Vec<TrackPoint>,
}

/// Everything assembled for one user.
#[derive(Debug)]
pub struct AssembledUser {
    pub bundles: Vec<ActivityBundle>,
    /// Bounds lookups that found no exact label match (labeled users only).
    pub label_misses: usize,
}

/// Assembles activities for a single user directory.
pub struct ActivityAssembler {
    user_id: String,
    user_dir: PathBuf,
    labels: Option<LabelIndex>,
}

impl ActivityAssembler {
    /// Prepare an assembler for one user.
    ///
    /// The label index is loaded up front when the user is flagged as
    /// labeled; a missing or unreadable label file is fatal in that case.
    pub fn new(user_id: &str, user_dir: &Path, has_labels: bool) -> Result<Self> {
        let labels = if has_labels {
            Some(LabelIndex::from_file(&user_dir.join(LABELS_FILE))?)
        } else {
            None
        };
        Ok(Self {
            user_id: user_id.to_string(),
            user_dir: user_dir.to_path_buf(),
            labels,
        })
    }

    /// Walk the user's trajectory files and build activity bundles.
    ///
    /// Files are visited in the order the filesystem returns them; nothing
    /// here depends on that order for correctness. A user with no trajectory
    /// files at all is an error, distinct from label misses which are only
    /// counted.
    pub fn assemble(&self) -> Result<AssembledUser> {
        let trajectory_dir = self.user_dir.join(TRAJECTORY_DIR);
        let mut files = Vec::new();
        let entries = fs::read_dir(&trajectory_dir).map_err(|source| IngestError::Io {
            path: trajectory_dir.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| IngestError::Io {
                path: trajectory_dir.clone(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| IngestError::Io {
                path: entry.path(),
                source,
            })?;
            if file_type.is_file() {
                files.push(entry.path());
            }
        }
        if files.is_empty() {
            return Err(IngestError::NoTrajectoryFiles(self.user_id.clone()));
        }

        let mut bundles = Vec::new();
        let mut label_misses = 0;
        for path in &files {
            let Some(rows) = plt::read_plt(path)? else {
                continue;
            };
            if rows.is_empty() {
                return Err(IngestError::EmptyTrajectory(path.clone()));
            }
            bundles.push(self.build_bundle(path, &rows, &mut label_misses)?);
        }

        tracing::info!(
            user_id = %self.user_id,
            files = files.len(),
            activities = bundles.len(),
            "Assembled activities for user"
        );
        Ok(AssembledUser {
            bundles,
            label_misses,
        })
    }

    fn build_bundle(
        &self,
        path: &Path,
        rows: &[RawTrackPoint],
        label_misses: &mut usize,
    ) -> Result<ActivityBundle> {
        let start_time = self.parse_bound(&rows[0], path, plt::HEADER_LINES + 1)?;
        let end_time = self.parse_bound(&rows[rows.len() - 1], path, plt::HEADER_LINES + rows.len())?;

        let transportation_mode = match &self.labels {
            Some(index) => match index.get(start_time, end_time) {
                Some(mode) => Some(mode.to_string()),
                None => {
                    *label_misses += 1;
                    tracing::debug!(
                        user_id = %self.user_id,
                        start = %start_time,
                        end = %end_time,
                        "No exact label match for activity bounds"
                    );
                    None
                }
            },
            None => None,
        };

        let trackpoints =
            format::format_trackpoints(rows, None).map_err(|source| IngestError::Format {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(ActivityBundle {
            activity: Activity {
                id: None,
                user_id: self.user_id.clone(),
                transportation_mode,
                start_time,
                end_time,
                trackpoint_ids: None,
            },
            trackpoints,
        })
    }

    /// Strict parse of an activity bound from a raw row's date + time fields.
    fn parse_bound(
        &self,
        row: &RawTrackPoint,
        path: &Path,
        line: usize,
    ) -> Result<chrono::NaiveDateTime> {
        crate::time_utils::parse_plt_bound(&row.date, &row.time).map_err(|e| {
            IngestError::MalformedRow {
                path: path.to_path_buf(),
                line,
                message: format!("bad activity bound '{} {}': {}", row.date, row.time, e),
            }
        })
    }
}
