// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage sink.
//!
//! Stands in for a real datastore in tests and offline runs: inserts land in
//! plain vectors and identifiers come from monotonic counters, so an echoed
//! ID is immediately usable as a foreign key.

use crate::models::{Activity, TrackPoint, User};
use crate::store::{kinds, ActivityId, StorageSink, StoreError, TrackPointId};

/// Offline sink holding all inserted records in memory.
#[derive(Debug)]
pub struct MemoryStore {
    users: Vec<User>,
    activities: Vec<Activity>,
    trackpoints: Vec<(TrackPointId, TrackPoint)>,
    next_activity_id: ActivityId,
    next_trackpoint_id: TrackPointId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            activities: Vec::new(),
            trackpoints: Vec::new(),
            next_activity_id: 1,
            next_trackpoint_id: 1,
        }
    }

    /// All inserted users, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All inserted activities, in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// All inserted trackpoints with their assigned IDs, in insertion order.
    pub fn trackpoints(&self) -> &[(TrackPointId, TrackPoint)] {
        &self.trackpoints
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageSink for MemoryStore {
    fn insert_user(&mut self, user: &User) -> Result<String, StoreError> {
        tracing::trace!(kind = kinds::USER, id = %user.id, "insert_one");
        self.users.push(user.clone());
        Ok(user.id.clone())
    }

    fn insert_activity(&mut self, activity: &Activity) -> Result<ActivityId, StoreError> {
        let mut record = activity.clone();
        // Echo a pre-assigned ID; otherwise materialize the next one.
        let id = match record.id {
            Some(id) => id,
            None => {
                let id = self.next_activity_id;
                self.next_activity_id += 1;
                record.id = Some(id);
                id
            }
        };
        tracing::trace!(kind = kinds::ACTIVITY, id, "insert_one");
        self.activities.push(record);
        Ok(id)
    }

    fn insert_trackpoints(&mut self, points: &[TrackPoint]) -> Result<Vec<TrackPointId>, StoreError> {
        let mut ids = Vec::with_capacity(points.len());
        for point in points {
            let id = self.next_trackpoint_id;
            self.next_trackpoint_id += 1;
            self.trackpoints.push((id, point.clone()));
            ids.push(id);
        }
        tracing::trace!(kind = kinds::TRACKPOINT, count = ids.len(), "insert_many");
        Ok(ids)
    }
}
