// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ingestion driver.
//!
//! Orchestrates the pipeline across the whole dataset:
//! 1. Enumerate user directories and flag each against the labeled-ID manifest
//! 2. Persist the user record
//! 3. Assemble the user's activities
//! 4. Persist activities and trackpoints under the configured ID strategy
//! 5. Flush any deferred trackpoints in fixed-size chunks at the end

use crate::config::Config;
use crate::error::{IngestError, Result};
use crate::models::{TrackPoint, User};
use crate::services::assembler::{ActivityAssembler, ActivityBundle};
use crate::services::labels;
use crate::store::StorageSink;
use std::fs;

/// Name of the directory holding one subdirectory per user.
const DATA_DIR: &str = "Data";

/// Manifest listing label-bearing user IDs, one per line.
const LABELED_IDS_FILE: &str = "labeled_ids.txt";

/// How activity identifiers are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// The store assigns trackpoint IDs; each activity embeds them.
    StoreAssigned,
    /// The driver assigns sequential activity IDs; trackpoints carry a
    /// back-reference. Required for deferred bulk insertion.
    DriverAssigned,
}

/// Strictly increasing activity ID source, shared across all users in a run.
///
/// Owned by the caller and handed into the driver; a concurrent
/// re-implementation would have to make the increment atomic.
#[derive(Debug)]
pub struct ActivityIdCounter {
    next: i64,
}

impl ActivityIdCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next ID. IDs are never reused, even when a later
    /// trajectory file is skipped.
    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for ActivityIdCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one ingestion run.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub users: usize,
    pub activities: usize,
    pub trackpoints: usize,
    /// Label lookups that found no exact match (labeled users only).
    pub label_misses: usize,
    /// Indices of deferred bulk chunks whose insert failed.
    pub failed_chunks: Vec<usize>,
}

impl IngestReport {
    /// True when every bulk chunk made it into the store.
    pub fn is_complete(&self) -> bool {
        self.failed_chunks.is_empty()
    }
}

/// Drives the full dataset through parsing, labeling and persistence.
///
/// Users are processed one at a time, fully, before the next begins. A fatal
/// error from any user aborts the run; only deferred bulk chunks tolerate
/// per-chunk failure.
pub struct IngestDriver<'a, S: StorageSink> {
    sink: &'a mut S,
    config: Config,
    counter: ActivityIdCounter,
}

impl<'a, S: StorageSink> IngestDriver<'a, S> {
    pub fn new(sink: &'a mut S, config: Config, counter: ActivityIdCounter) -> Self {
        Self {
            sink,
            config,
            counter,
        }
    }

    /// Run the whole ingestion and return the report.
    pub fn run(mut self) -> Result<IngestReport> {
        let data_dir = self.config.dataset_root.join(DATA_DIR);
        let manifest = self.config.dataset_root.join(LABELED_IDS_FILE);
        let labeled_ids = labels::read_labeled_ids(&manifest)?;
        tracing::info!(
            root = %self.config.dataset_root.display(),
            labeled_users = labeled_ids.len(),
            "Starting ingestion run"
        );

        let mut user_ids = Vec::new();
        let entries = fs::read_dir(&data_dir).map_err(|source| IngestError::Io {
            path: data_dir.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| IngestError::Io {
                path: data_dir.clone(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| IngestError::Io {
                path: entry.path(),
                source,
            })?;
            if file_type.is_dir() {
                user_ids.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        if let Some(limit) = self.config.user_limit {
            user_ids.truncate(limit);
        }

        let mut report = IngestReport::default();
        let mut pending: Vec<TrackPoint> = Vec::new();

        for user_id in &user_ids {
            let has_labels = labeled_ids.contains(user_id);
            self.sink.insert_user(&User {
                id: user_id.clone(),
                has_labels,
            })?;
            report.users += 1;

            let user_dir = data_dir.join(user_id);
            let assembled = ActivityAssembler::new(user_id, &user_dir, has_labels)?.assemble()?;
            report.label_misses += assembled.label_misses;

            for bundle in assembled.bundles {
                self.persist_bundle(bundle, &mut pending, &mut report)?;
            }
            tracing::info!(user_id = %user_id, "Finished ingesting user");
        }

        if !pending.is_empty() {
            self.flush_pending(pending, &mut report);
        }

        tracing::info!(
            users = report.users,
            activities = report.activities,
            trackpoints = report.trackpoints,
            label_misses = report.label_misses,
            failed_chunks = report.failed_chunks.len(),
            "Ingestion run complete"
        );
        Ok(report)
    }

    fn persist_bundle(
        &mut self,
        bundle: ActivityBundle,
        pending: &mut Vec<TrackPoint>,
        report: &mut IngestReport,
    ) -> Result<()> {
        let ActivityBundle {
            mut activity,
            mut trackpoints,
        } = bundle;

        match self.config.id_strategy {
            IdStrategy::StoreAssigned => {
                // Trackpoints go first so the activity can embed their IDs.
                let ids = self.sink.insert_trackpoints(&trackpoints)?;
                report.trackpoints += ids.len();
                activity.trackpoint_ids = Some(ids);
                self.sink.insert_activity(&activity)?;
            }
            IdStrategy::DriverAssigned => {
                let id = self.counter.next_id();
                activity.id = Some(id);
                self.sink.insert_activity(&activity)?;
                for point in &mut trackpoints {
                    point.activity_id = Some(id);
                }
                if self.config.deferred_bulk {
                    pending.append(&mut trackpoints);
                } else {
                    let ids = self.sink.insert_trackpoints(&trackpoints)?;
                    report.trackpoints += ids.len();
                }
            }
        }
        report.activities += 1;
        Ok(())
    }

    /// Flush accumulated trackpoints in fixed-size chunks.
    ///
    /// A failed chunk is logged with its index and recorded in the report;
    /// flushing continues with the next chunk.
    fn flush_pending(&mut self, pending: Vec<TrackPoint>, report: &mut IngestReport) {
        tracing::info!(
            total = pending.len(),
            chunk_size = self.config.chunk_size,
            "Flushing deferred trackpoints"
        );
        for (index, chunk) in pending.chunks(self.config.chunk_size).enumerate() {
            match self.sink.insert_trackpoints(chunk) {
                Ok(ids) => {
                    report.trackpoints += ids.len();
                    tracing::info!(
                        chunk = index,
                        inserted = report.trackpoints,
                        "Finished inserting trackpoint chunk"
                    );
                }
                Err(err) => {
                    tracing::error!(chunk = index, error = %err, "Trackpoint chunk insert failed");
                    report.failed_chunks.push(index);
                }
            }
        }
    }
}
