// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trajectory activity model for storage.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One trajectory segment owned by a user.
///
/// Exactly one of the two identifier shapes is populated per record: `id`
/// when the driver assigns sequential IDs (trackpoints back-reference it),
/// `trackpoint_ids` when the store assigns them (embedding).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Driver-assigned activity ID (absent when the store assigns one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Owning user (dataset directory name)
    pub user_id: String,
    /// Human-assigned transportation mode, when a label matched exactly
    pub transportation_mode: Option<String>,
    /// Timestamp of the first trackpoint row
    pub start_time: NaiveDateTime,
    /// Timestamp of the last trackpoint row
    pub end_time: NaiveDateTime,
    /// Embedded trackpoint IDs (store-assigned strategy only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trackpoint_ids: Option<Vec<i64>>,
}
